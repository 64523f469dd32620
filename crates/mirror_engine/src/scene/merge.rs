//! Folding inspection results back into a scene description

use super::description::{Identified, SceneDescription};
use crate::reflection::InspectionResult;

/// What a merge changed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeSummary {
    /// Records appended to the scene
    pub added: usize,
    /// Existing records overwritten in place
    pub replaced: usize,
}

impl MergeSummary {
    fn record(&mut self, replaced: bool) {
        if replaced {
            self.replaced += 1;
        } else {
            self.added += 1;
        }
    }
}

/// Insert `record`, overwriting any record with the same id; true if one was overwritten
fn upsert<T: Identified + Clone>(records: &mut Vec<T>, record: &T) -> bool {
    if let Some(existing) = records.iter_mut().find(|existing| existing.id() == record.id()) {
        *existing = record.clone();
        true
    } else {
        records.push(record.clone());
        false
    }
}

impl SceneDescription {
    /// Merge derived records from an inspection of `inspected_object_id`
    ///
    /// Records are matched by identifier, so merging the same inspection
    /// twice leaves the scene as after the first merge. The inspected object
    /// stops pulsing.
    pub fn merge_inspection(&mut self, result: &InspectionResult, inspected_object_id: &str) -> MergeSummary {
        let mut summary = MergeSummary::default();
        for viewer in &result.virtual_viewers {
            summary.record(upsert(&mut self.viewers, viewer));
        }
        for object in &result.virtual_objects {
            summary.record(upsert(&mut self.objects, object));
        }
        for ray in &result.rays {
            summary.record(upsert(&mut self.rays, ray));
        }

        if let Some(object) = self
            .objects
            .iter_mut()
            .find(|object| object.id == inspected_object_id)
        {
            object.is_pulsing = false;
        }

        log::debug!(
            "Merged inspection of '{inspected_object_id}': {} added, {} replaced",
            summary.added,
            summary.replaced
        );
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReflectionConfig;
    use crate::foundation::math::Vec2;
    use crate::reflection::inspect;
    use crate::scene::initialize_from_scene;

    fn inspect_default(scene: &SceneDescription) -> InspectionResult {
        let (world, ids) = initialize_from_scene(scene).unwrap();
        inspect(&world, &ids, "object1", "viewer1", &ReflectionConfig::default()).unwrap()
    }

    #[test]
    fn test_merge_adds_derived_records() {
        let mut scene = SceneDescription::default_scene();
        let result = inspect_default(&scene);
        assert_eq!(result.paths.len(), 2);

        let summary = scene.merge_inspection(&result, "object1");

        assert_eq!(summary, MergeSummary { added: 8, replaced: 0 });
        assert_eq!(scene.viewers.len(), 3);
        assert_eq!(scene.objects.len(), 3);
        assert_eq!(scene.rays.len(), 4);
        assert!(!scene.find_object("object1").unwrap().is_pulsing);
    }

    #[test]
    fn test_merge_twice_does_not_duplicate() {
        let mut scene = SceneDescription::default_scene();
        let result = inspect_default(&scene);

        scene.merge_inspection(&result, "object1");
        let once = scene.clone();
        let summary = scene.merge_inspection(&result, "object1");

        assert_eq!(summary, MergeSummary { added: 0, replaced: 8 });
        assert_eq!(scene, once);
    }

    #[test]
    fn test_reinspection_after_merge_is_stable() {
        let mut scene = SceneDescription::default_scene();
        let first = inspect_default(&scene);
        scene.merge_inspection(&first, "object1");

        // derived entities are in the store now but do not change the result
        let second = inspect_default(&scene);
        assert_eq!(first, second);
    }

    #[test]
    fn test_moved_mirror_overwrites_in_place() {
        let mut scene = SceneDescription::default_scene();
        scene.merge_inspection(&inspect_default(&scene), "object1");

        scene.mirrors[0].position.x += 50.0;
        let moved = inspect_default(&scene);
        scene.merge_inspection(&moved, "object1");

        assert_eq!(scene.viewers.len(), 3);
        let image = scene
            .find_viewer("virtual-viewer:object1:viewer1:mirror1")
            .unwrap();
        assert_eq!(image.position, moved.virtual_viewers[0].position);
        assert_ne!(image.position, Vec2::zeros());
    }
}
