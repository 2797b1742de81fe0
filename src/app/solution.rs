use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;

use anyhow::Context;
use tracing::{debug, error};

pub(super) const LOAD_FAILED_PLACEHOLDER: &str = "// Error loading code";

#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) enum SolutionText {
    Loading,
    Loaded(String),
    Failed,
}

#[derive(Debug)]
pub(super) struct SolutionResult {
    generation: u64,
    index: usize,
    text: Result<String, String>,
}

#[derive(Clone, Debug)]
pub(super) struct CurrentSolution {
    pub(super) index: usize,
    pub(super) language: &'static str,
    pub(super) text: SolutionText,
    generation: u64,
}

impl CurrentSolution {
    /// What the code area shows and what "Copy Code" copies.
    pub(super) fn display_text(&self) -> &str {
        match &self.text {
            SolutionText::Loading => "",
            SolutionText::Loaded(text) => text,
            SolutionText::Failed => LOAD_FAILED_PLACEHOLDER,
        }
    }
}

/// Loads solution listings off the UI thread. Every request bumps a generation counter and
/// only the newest generation's result is ever shown.
pub(super) struct SolutionLoader {
    generation: u64,
    tx: Sender<SolutionResult>,
    rx: Receiver<SolutionResult>,
    current: Option<CurrentSolution>,
}

impl SolutionLoader {
    pub(super) fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            generation: 0,
            tx,
            rx,
            current: None,
        }
    }

    pub(super) fn current(&self) -> Option<&CurrentSolution> {
        self.current.as_ref()
    }

    pub(super) fn request(&mut self, index: usize, path: PathBuf) {
        let generation = self.begin(index, &path);
        let tx = self.tx.clone();

        thread::spawn(move || {
            let text = read_solution(&path).map_err(|error| format!("{error:#}"));
            let _ = tx.send(SolutionResult {
                generation,
                index,
                text,
            });
        });
    }

    fn begin(&mut self, index: usize, path: &Path) -> u64 {
        self.generation += 1;
        self.current = Some(CurrentSolution {
            index,
            language: language_for_path(path),
            text: SolutionText::Loading,
            generation: self.generation,
        });
        self.generation
    }

    /// Drains finished loads; returns true when the displayed text changed.
    pub(super) fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(result) = self.rx.try_recv() {
            changed |= self.accept(result);
        }
        changed
    }

    fn accept(&mut self, result: SolutionResult) -> bool {
        let Some(current) = self.current.as_mut() else {
            return false;
        };

        if result.generation != current.generation || result.index != current.index {
            debug!(
                index = result.index,
                generation = result.generation,
                "discarding superseded solution load"
            );
            return false;
        }

        current.text = match result.text {
            Ok(text) => SolutionText::Loaded(text),
            Err(message) => {
                error!(index = result.index, "error loading code: {message}");
                SolutionText::Failed
            }
        };
        true
    }
}

fn read_solution(path: &Path) -> anyhow::Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Highlighter language token for a solution file.
pub(super) fn language_for_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|value| value.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("cpp" | "cc" | "cxx" | "hpp" | "h") => "cpp",
        Some("c") => "c",
        Some("py") => "py",
        Some("rs") => "rs",
        Some("java") => "java",
        Some("js") => "js",
        Some("go") => "go",
        Some("kt") => "kt",
        _ => "txt",
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use super::*;

    fn result(generation: u64, index: usize, text: Result<&str, &str>) -> SolutionResult {
        SolutionResult {
            generation,
            index,
            text: text.map(str::to_owned).map_err(str::to_owned),
        }
    }

    #[test]
    fn newest_request_wins_over_late_results() {
        let mut loader = SolutionLoader::new();
        let first = loader.begin(0, Path::new("a.cpp"));
        let second = loader.begin(1, Path::new("b.py"));

        assert!(loader.accept(result(second, 1, Ok("print(1)"))));
        assert!(!loader.accept(result(first, 0, Ok("int main() {}"))));

        let current = loader.current().unwrap();
        assert_eq!(current.index, 1);
        assert_eq!(current.language, "py");
        assert_eq!(current.display_text(), "print(1)");
    }

    #[test]
    fn stale_result_does_not_clobber_pending_load() {
        let mut loader = SolutionLoader::new();
        let first = loader.begin(0, Path::new("a.cpp"));
        loader.begin(1, Path::new("b.cpp"));

        assert!(!loader.accept(result(first, 0, Ok("old"))));
        assert_eq!(loader.current().unwrap().text, SolutionText::Loading);
    }

    #[test]
    fn failure_shows_placeholder() {
        let mut loader = SolutionLoader::new();
        let generation = loader.begin(2, Path::new("c.cpp"));

        assert!(loader.accept(result(generation, 2, Err("not found"))));
        assert_eq!(
            loader.current().unwrap().display_text(),
            LOAD_FAILED_PLACEHOLDER
        );
    }

    #[test]
    fn loads_file_in_background() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a1.cpp");
        fs::write(&path, "int main() { return 0; }").unwrap();

        let mut loader = SolutionLoader::new();
        loader.request(0, path);

        let deadline = Instant::now() + Duration::from_secs(5);
        while !loader.poll() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
        }

        assert_eq!(
            loader.current().unwrap().display_text(),
            "int main() { return 0; }"
        );
    }

    #[test]
    fn missing_file_fails_without_panicking() {
        let dir = tempfile::tempdir().unwrap();
        let mut loader = SolutionLoader::new();
        loader.request(0, dir.path().join("missing.cpp"));

        let deadline = Instant::now() + Duration::from_secs(5);
        while !loader.poll() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
        }

        assert_eq!(loader.current().unwrap().text, SolutionText::Failed);
    }

    #[test]
    fn languages_follow_extension() {
        assert_eq!(language_for_path(Path::new("x/a.CPP")), "cpp");
        assert_eq!(language_for_path(Path::new("b.rs")), "rs");
        assert_eq!(language_for_path(Path::new("README")), "txt");
    }
}
