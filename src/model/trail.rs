use std::collections::VecDeque;

use nalgebra::Point3;

/// A bounded history of positions. Only every `interval`-th position offered to
/// `record` is kept, and only the most recent `retain` of those.
#[derive(Debug, Clone)]
pub struct Trail {
    points: VecDeque<Point3<f64>>,
    interval: usize,
    retain: usize,
    counter: usize,
}

impl Trail {
    pub fn new(interval: usize, retain: usize) -> Self {
        assert!(interval >= 1, "Trail interval must be at least 1");
        Trail {
            points: VecDeque::with_capacity(retain),
            interval,
            retain,
            counter: 0,
        }
    }

    pub fn record(&mut self, position: Point3<f64>) {
        if self.counter % self.interval == 0 {
            self.points.push_back(position);
            while self.points.len() > self.retain {
                self.points.pop_front();
            }
        }
        self.counter += 1;
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.counter = 0;
    }

    pub fn points(&self) -> impl Iterator<Item = &Point3<f64>> + '_ {
        self.points.iter()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
