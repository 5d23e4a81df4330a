use crate::domain::{bolt::Bolt, random::RandomSource};

/// Grows every bolt by one segment and drops those past their length cap.
/// Returns how many bolts were retired.
pub fn extend_bolts(bolts: &mut Vec<Bolt>, rng: &mut impl RandomSource) -> usize {
    let before = bolts.len();
    bolts.retain_mut(|bolt| {
        bolt.extend(rng);
        let alive = !bolt.exceeds_limit();
        bolt.has_rendered = true;
        alive
    });
    before - bolts.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{domain::bolt::Point, test_support::ScriptedRandom};

    #[test]
    fn bolt_retires_the_frame_it_exceeds_its_cap() {
        // jitter 5/5, limit 10
        let mut rng = ScriptedRandom::new([0.0]);
        let mut bolts = vec![Bolt::root(Point::new(200.0, 50.0), &mut rng)];
        assert_eq!(bolts[0].max_path_len(), 10);

        for expected_len in 2..=10 {
            assert_eq!(extend_bolts(&mut bolts, &mut rng), 0);
            assert_eq!(bolts[0].path().len(), expected_len);
            assert!(bolts[0].has_rendered);
        }
        assert_eq!(extend_bolts(&mut bolts, &mut rng), 1);
        assert!(bolts.is_empty());
    }

    #[test]
    fn removal_does_not_skip_neighbours() {
        let mut short = ScriptedRandom::new([0.0]);
        let mut long = ScriptedRandom::new([0.999]);
        let mut bolts = vec![
            Bolt::root(Point::new(0.0, 0.0), &mut short),
            Bolt::root(Point::new(10.0, 0.0), &mut long),
            Bolt::root(Point::new(20.0, 0.0), &mut short),
        ];
        let mut rng = ScriptedRandom::new([0.5]);
        for _ in 0..9 {
            extend_bolts(&mut bolts, &mut rng);
        }
        assert_eq!(extend_bolts(&mut bolts, &mut rng), 2);
        assert_eq!(bolts.len(), 1);
        assert_eq!(bolts[0].origin(), Point::new(10.0, 0.0));
        assert_eq!(bolts[0].path().len(), 11);
    }
}
