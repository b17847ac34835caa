use console::style;

/// Receives one report before each archive entry is written.
pub trait Progress {
    fn report(&self, index: usize, total: usize, label: &str);
}

impl<P: Progress + ?Sized> Progress for &P {
    fn report(&self, index: usize, total: usize, label: &str) {
        (**self).report(index, total, label)
    }
}

/// Whole percent of `index` out of `total`, rounded down. An empty run counts as done.
pub fn percentage(index: usize, total: usize) -> usize {
    if total == 0 {
        return 100;
    }
    index * 100 / total
}

fn counter(index: usize, total: usize) -> String {
    format!("[{}/{} {}%]", index + 1, total, percentage(index, total))
}

pub fn progress_line(index: usize, total: usize, label: &str) -> String {
    format!("{} Writing {label}", counter(index, total))
}

/// Prints progress lines to stdout.
#[derive(Debug, Default)]
pub struct ConsoleProgress;

impl Progress for ConsoleProgress {
    fn report(&self, index: usize, total: usize, label: &str) {
        println!(
            "{} {}",
            style(counter(index, total)).white().bold(),
            style(format!("Writing {label}")).dim()
        );
    }
}

#[derive(Debug, Default)]
pub struct SilentProgress;

impl Progress for SilentProgress {
    fn report(&self, _index: usize, _total: usize, _label: &str) {}
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rstest::rstest;
    use std::sync::Mutex;

    /// Keeps every report for later inspection.
    #[derive(Default)]
    pub struct RecordingProgress {
        pub reports: Mutex<Vec<(usize, usize, String)>>,
    }

    impl Progress for RecordingProgress {
        fn report(&self, index: usize, total: usize, label: &str) {
            self.reports
                .lock()
                .unwrap()
                .push((index, total, label.to_string()));
        }
    }

    #[rstest]
    #[case(4, 200, 2)]
    #[case(0, 3, 0)]
    #[case(1, 3, 33)]
    #[case(2, 3, 66)]
    #[case(199, 200, 99)]
    #[case(0, 0, 100)]
    fn percentage_rounds_down(#[case] index: usize, #[case] total: usize, #[case] expected: usize) {
        assert_eq!(percentage(index, total), expected);
    }

    #[test]
    fn line_counts_from_one() {
        assert_eq!(
            progress_line(4, 200, "assets/minecraft/sounds/x.ogg"),
            "[5/200 2%] Writing assets/minecraft/sounds/x.ogg"
        );
    }
}
