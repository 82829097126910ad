//! Tests for per-batch progress tracking

#[cfg(test)]
mod tests {
    use gridcrop::crop::batch::BatchObserver;
    use gridcrop::io::progress::ProgressManager;
    use std::path::Path;

    // Tests bars advance per saved file and count batches
    // Verified by incrementing the wrong bar
    #[test]
    fn test_progress_tracks_batches() {
        let mut pm = ProgressManager::hidden();

        pm.batch_started("woman", 2);
        pm.file_saved("woman", 1, Path::new("out/avatar_woman_1.png"));
        pm.batch_started("man", 3);
        pm.file_saved("man", 1, Path::new("out/avatar_man_1.png"));
        pm.file_saved("woman", 2, Path::new("out/avatar_woman_2.png"));

        assert_eq!(pm.batch_count(), 2);
        assert_eq!(pm.files_saved(), 3);
        assert_eq!(pm.position("woman"), Some(2));
        assert_eq!(pm.position("man"), Some(1));
        assert_eq!(pm.position("child"), None);

        pm.batch_finished("woman");
        pm.finish();
    }

    // Tests default trait implementation
    // Verified by starting with a non-empty bar list
    #[test]
    fn test_progress_manager_default() {
        let pm = ProgressManager::default();

        assert_eq!(pm.batch_count(), 0);
        assert_eq!(pm.files_saved(), 0);
        pm.finish();
    }

    // Tests unknown labels still count saved files without panicking
    // Verified by indexing bars directly
    #[test]
    fn test_progress_unknown_label() {
        let mut pm = ProgressManager::hidden();

        pm.file_saved("ghost", 1, Path::new("ghost_1.png"));
        pm.batch_finished("ghost");

        assert_eq!(pm.files_saved(), 1);
    }
}
