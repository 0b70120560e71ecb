use crate::collision_system::SweepReport;
use crate::render::RenderSink;
use crate::world::World;

/// Owns a world and the sink it is drawn to and advances both one frame at a time.
pub struct FrameDriver<S: RenderSink> {
    world: World,
    sink: S,
    frame: u64,
}

impl<S: RenderSink> FrameDriver<S> {
    pub fn new(world: World, sink: S) -> FrameDriver<S> {
        FrameDriver {
            world,
            sink,
            frame: 0,
        }
    }

    /// update, clear, render
    pub fn tick(&mut self) -> SweepReport {
        let report = self.world.update();
        self.sink.clear(&self.world.bounds());
        self.world.render(&mut self.sink);
        self.frame += 1;
        log::trace!(
            "frame {}: {} pairs tested, {} collisions",
            self.frame,
            report.pairs_tested,
            report.collision_count()
        );
        report
    }

    /// Runs `frames` ticks and returns the total number of detected collisions.
    pub fn run(&mut self, frames: u64) -> usize {
        let mut collisions = 0;
        for _ in 0..frames {
            collisions += self.tick().collision_count();
        }
        collisions
    }

    /// number of completed ticks
    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_parts(self) -> (World, S) {
        (self.world, self.sink)
    }
}
