//! Testimonial carousel state.

use std::num::NonZeroUsize;

/// Slide index for a carousel with at least one slide.
///
/// All navigation wraps: stepping past the last slide returns to the first,
/// and stepping back from the first lands on the last. [`Carousel::go_to`]
/// applies the same rule to arbitrary indices, so an out-of-range request
/// never leaves the carousel without an active slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    slides: NonZeroUsize,
    current: usize,
}

impl Carousel {
    /// Create a carousel positioned on the first slide.
    ///
    /// Returns `None` for zero slides; the section is not mounted then.
    pub fn new(slides: usize) -> Option<Self> {
        NonZeroUsize::new(slides).map(|slides| Self { slides, current: 0 })
    }

    /// Total number of slides.
    pub fn slide_count(&self) -> usize {
        self.slides.get()
    }

    /// Index of the active slide.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Advance one slide, wrapping to the first.
    pub fn next(&mut self) {
        self.current = (self.current + 1) % self.slides;
    }

    /// Step back one slide, wrapping to the last.
    pub fn prev(&mut self) {
        let count = self.slides.get();
        self.current = (self.current + count - 1) % count;
    }

    /// Jump to `index`, wrapping with the Euclidean remainder.
    ///
    /// `go_to(-1)` selects the last slide, `go_to(slide_count())` the first.
    pub fn go_to(&mut self, index: isize) {
        let count = self.slides.get() as isize;
        self.current = index.rem_euclid(count) as usize;
    }

    /// Whether slide (or indicator) `index` carries the active marker.
    pub fn is_active(&self, index: usize) -> bool {
        index == self.current
    }

    /// Previous/next controls and indicators are only shown for two or more slides.
    pub fn has_controls(&self) -> bool {
        self.slides.get() > 1
    }

    /// CSS transform for the slide track.
    pub fn track_transform(&self) -> String {
        format!("translateX(-{}%)", self.current * 100)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_empty_carousel_is_none() {
        assert!(Carousel::new(0).is_none());
    }

    #[test]
    fn test_starts_on_first_slide() {
        let carousel = Carousel::new(3).unwrap();
        assert_eq!(carousel.current(), 0);
        assert_eq!(carousel.track_transform(), "translateX(-0%)");
    }

    #[test]
    fn test_next_wraps() {
        let mut carousel = Carousel::new(3).unwrap();
        carousel.next();
        carousel.next();
        assert_eq!(carousel.current(), 2);
        carousel.next();
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn test_prev_from_first_goes_to_last() {
        let mut carousel = Carousel::new(4).unwrap();
        carousel.prev();
        assert_eq!(carousel.current(), 3);
        assert_eq!(carousel.track_transform(), "translateX(-300%)");
    }

    #[test]
    fn test_go_to_out_of_range_wraps() {
        let mut carousel = Carousel::new(3).unwrap();
        carousel.go_to(3);
        assert_eq!(carousel.current(), 0);
        carousel.go_to(-1);
        assert_eq!(carousel.current(), 2);
        carousel.go_to(7);
        assert_eq!(carousel.current(), 1);
    }

    #[test]
    fn test_single_slide_has_no_controls() {
        let mut carousel = Carousel::new(1).unwrap();
        assert!(!carousel.has_controls());
        carousel.next();
        carousel.prev();
        assert_eq!(carousel.current(), 0);
        assert!(Carousel::new(2).unwrap().has_controls());
    }

    proptest! {
        #[test]
        fn next_n_times_lands_on_n_mod_k(k in 1usize..32, n in 0usize..200) {
            let mut carousel = Carousel::new(k).unwrap();
            for _ in 0..n {
                carousel.next();
            }
            prop_assert_eq!(carousel.current(), n % k);
        }

        #[test]
        fn prev_n_times_mirrors_next(k in 1usize..32, n in 0usize..200) {
            let mut carousel = Carousel::new(k).unwrap();
            for _ in 0..n {
                carousel.prev();
            }
            prop_assert_eq!(carousel.current(), (k - n % k) % k);
        }

        #[test]
        fn go_to_marks_exactly_one_active(k in 1usize..32, seed in 0usize..32) {
            let i = seed % k;
            let mut carousel = Carousel::new(k).unwrap();
            carousel.go_to(i as isize);
            let active: Vec<usize> = (0..k).filter(|&s| carousel.is_active(s)).collect();
            prop_assert_eq!(active, vec![i]);
        }
    }
}
