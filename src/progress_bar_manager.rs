use crate::ua_error::UaError;
use chrono::Local;
use indicatif::{ProgressBar, ProgressStyle};

pub struct ProgressBarManager {
    main_pb: ProgressBar,
}

impl ProgressBarManager {
    pub fn init(main_pb_len: u64) -> Result<ProgressBarManager, UaError> {
        let main_style = ProgressStyle::default_bar()
            .template("[{elapsed_precise}] [{bar:60.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-");
        let main_pb = ProgressBar::new(main_pb_len);
        main_pb.set_style(main_style);
        Ok(ProgressBarManager { main_pb })
    }

    /// Nothing is drawn, log lines included.
    #[cfg(test)]
    pub fn hidden() -> ProgressBarManager {
        ProgressBarManager {
            main_pb: ProgressBar::hidden(),
        }
    }

    pub fn increment_global_progress(&self) {
        self.main_pb.inc(1)
    }

    #[cfg(test)]
    pub fn position(&self) -> u64 {
        self.main_pb.position()
    }

    pub fn finish(&self) {
        self.main_pb.finish();
    }

    pub fn log_above_progress_bars(&self, msg: String) {
        ProgressBarManager::log_above_progress_bar(&self.main_pb, msg)
    }

    pub fn log_above_progress_bar(pb: &ProgressBar, msg: String) {
        pb.println(format!("[{}] {}", Local::now().naive_local(), msg));
    }
}

#[cfg(test)]
mod progress_bar_manager_tests {
    use super::*;

    #[test]
    fn init_with_valid_template() {
        let pbm = ProgressBarManager::init(3).unwrap();
        pbm.increment_global_progress();
        pbm.increment_global_progress();
        assert_eq!(pbm.position(), 2);
        pbm.finish();
    }

    #[test]
    fn hidden_still_counts() {
        let pbm = ProgressBarManager::hidden();
        pbm.log_above_progress_bars("not displayed".to_string());
        pbm.increment_global_progress();
        assert_eq!(pbm.position(), 1);
    }
}
