use crate::engine::tracking::{SurfaceHit, SurfaceType};

/// Pick the hit to place on: first detected surface, else first estimated
/// surface, else whatever the engine listed first.
///
/// Ordering within a type is the engine's; no distance or confidence
/// comparison is made.
pub fn select_best_hit(hits: &[SurfaceHit]) -> Option<&SurfaceHit> {
    hits.iter()
        .find(|hit| hit.surface == SurfaceType::DetectedSurface)
        .or_else(|| {
            hits.iter()
                .find(|hit| hit.surface == SurfaceType::EstimatedSurface)
        })
        .or_else(|| hits.first())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::prelude::*;
    use proptest::prelude::*;

    fn hit(surface: SurfaceType, x: f32) -> SurfaceHit {
        SurfaceHit::new(surface, Vec3::new(x, 0.0, 0.0), Quat::IDENTITY)
    }

    fn surface_type() -> impl Strategy<Value = SurfaceType> {
        prop_oneof![
            Just(SurfaceType::DetectedSurface),
            Just(SurfaceType::EstimatedSurface),
            Just(SurfaceType::Other),
        ]
    }

    fn hits_of(types: impl Strategy<Value = SurfaceType>) -> impl Strategy<Value = Vec<SurfaceHit>> {
        prop::collection::vec(types, 0..12).prop_map(|types| {
            types
                .into_iter()
                .enumerate()
                .map(|(i, surface)| hit(surface, i as f32))
                .collect()
        })
    }

    #[test]
    fn empty_collection_selects_nothing() {
        assert!(select_best_hit(&[]).is_none());
    }

    #[test]
    fn detected_beats_earlier_estimated() {
        let hits = [
            hit(SurfaceType::Other, 0.0),
            hit(SurfaceType::EstimatedSurface, 1.0),
            hit(SurfaceType::DetectedSurface, 2.0),
            hit(SurfaceType::DetectedSurface, 3.0),
        ];

        assert_eq!(select_best_hit(&hits), Some(&hits[2]));
    }

    #[test]
    fn falls_back_to_first_hit_of_any_type() {
        let hits = [hit(SurfaceType::Other, 7.0), hit(SurfaceType::Other, 8.0)];
        assert_eq!(select_best_hit(&hits), Some(&hits[0]));
    }

    proptest! {
        #[test]
        fn any_detected_surface_wins(hits in hits_of(surface_type())) {
            let selected = select_best_hit(&hits);
            let first_detected = hits.iter().find(|h| h.surface == SurfaceType::DetectedSurface);

            if let Some(expected) = first_detected {
                prop_assert_eq!(selected, Some(expected));
            }
        }

        #[test]
        fn estimated_wins_without_detected(
            hits in hits_of(prop_oneof![
                Just(SurfaceType::EstimatedSurface),
                Just(SurfaceType::Other),
            ])
        ) {
            let first_estimated = hits.iter().find(|h| h.surface == SurfaceType::EstimatedSurface);
            if let Some(expected) = first_estimated {
                prop_assert_eq!(select_best_hit(&hits), Some(expected));
            }
        }

        #[test]
        fn other_only_selects_first(len in 1usize..8) {
            let hits: Vec<_> = (0..len).map(|i| hit(SurfaceType::Other, i as f32)).collect();
            prop_assert_eq!(select_best_hit(&hits), hits.first());
        }
    }
}
