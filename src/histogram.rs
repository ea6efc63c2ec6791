/*
 * Histogram Module
 *
 * Speed distribution of one particle type in the gas tank. The bars are
 * equal-width sections from 0 to `histogram_max`; the upper bound only
 * ever grows, to the fastest speed observed so far.
 */

use crate::particle::Particle;
use crate::Rgb;

pub const NUM_SECTIONS: usize = 10;

#[derive(Debug, Clone)]
pub struct SpeedHistogram {
    pub kind: usize,
    pub mass: f32,
    pub color: Rgb,
    pub histogram_max: f32,
    pub counts: Vec<usize>,
    pub max_count: usize,
    pub samples: usize,
}

impl SpeedHistogram {
    pub fn new(kind: usize, mass: f32, color: Rgb, histogram_max: f32) -> Self {
        Self {
            kind,
            mass,
            color,
            histogram_max: histogram_max.max(1.0),
            counts: vec![0; NUM_SECTIONS],
            max_count: 0,
            samples: 0,
        }
    }

    // Recount the speeds of every particle of this histogram's type
    pub fn update(&mut self, particles: &[Particle]) {
        // A particle at rest falls in no section
        let speeds: Vec<f32> = particles
            .iter()
            .filter(|p| p.kind == self.kind)
            .map(Particle::speed)
            .filter(|&speed| speed > 0.0)
            .collect();

        let fastest = speeds.iter().copied().fold(0.0_f32, f32::max);
        if fastest > self.histogram_max {
            self.histogram_max = fastest;
        }

        self.counts.iter_mut().for_each(|c| *c = 0);
        let width = self.section_width();
        for speed in &speeds {
            // Section k holds speeds in (k * width, (k + 1) * width]
            let section = ((speed / width).ceil() as usize).saturating_sub(1);
            self.counts[section.min(NUM_SECTIONS - 1)] += 1;
        }

        self.max_count = self.counts.iter().copied().max().unwrap_or(0);
        self.samples = speeds.len();
    }

    pub fn section_width(&self) -> f32 {
        self.histogram_max / NUM_SECTIONS as f32
    }

    // Upper speed bound of each section, for axis labels
    pub fn section_edges(&self) -> Vec<f32> {
        let width = self.section_width();
        (1..=NUM_SECTIONS).map(|k| k as f32 * width).collect()
    }

    // Bar height in [0, 1] relative to the fullest section
    pub fn relative_height(&self, section: usize) -> f32 {
        if self.max_count == 0 {
            return 0.0;
        }
        self.counts[section] as f32 / self.max_count as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Result;
    use crate::vector::Vector;

    fn moving(kind: usize, speed: f32) -> Result<Particle> {
        let mut p = Particle::new(Vector::ZERO, Vector::xy(speed, 0.0), 1.0, 1.0)?;
        p.kind = kind;
        Ok(p)
    }

    #[test]
    fn speeds_fall_into_sections() -> Result<()> {
        let mut histogram = SpeedHistogram::new(0, 1.0, [0, 0, 255], 10.0);
        let particles = vec![moving(0, 0.5)?, moving(0, 1.0)?, moving(0, 9.5)?, moving(1, 5.0)?];
        histogram.update(&particles);

        assert_eq!(histogram.samples, 3);
        assert_eq!(histogram.counts[0], 2);
        assert_eq!(histogram.counts[9], 1);
        assert_eq!(histogram.max_count, 2);
        assert_eq!(histogram.relative_height(9), 0.5);
        Ok(())
    }

    #[test]
    fn upper_bound_grows_with_fastest_particle() -> Result<()> {
        let mut histogram = SpeedHistogram::new(0, 1.0, [0, 0, 255], 10.0);
        histogram.update(&[moving(0, 40.0)?]);
        assert_eq!(histogram.histogram_max, 40.0);
        assert_eq!(histogram.counts[NUM_SECTIONS - 1], 1);

        // never shrinks back
        histogram.update(&[moving(0, 1.0)?]);
        assert_eq!(histogram.histogram_max, 40.0);
        Ok(())
    }

    #[test]
    fn particles_at_rest_are_not_counted() -> Result<()> {
        let mut histogram = SpeedHistogram::new(0, 1.0, [0, 0, 255], 10.0);
        histogram.update(&[moving(0, 0.0)?, moving(0, 3.0)?]);

        assert_eq!(histogram.samples, 1);
        assert_eq!(histogram.counts[0], 0);
        assert_eq!(histogram.counts[2], 1);
        assert_eq!(histogram.counts.iter().sum::<usize>(), 1);
        Ok(())
    }

    #[test]
    fn empty_population_has_flat_bars() {
        let mut histogram = SpeedHistogram::new(2, 50.0, [255, 0, 0], 19.5);
        histogram.update(&[]);
        assert_eq!(histogram.samples, 0);
        assert_eq!(histogram.relative_height(0), 0.0);
    }
}
