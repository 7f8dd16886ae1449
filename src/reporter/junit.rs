//! JUnit 4 suite generation.
//!
//! Turns every listed source path into a class literal and wraps the list in a
//! `@RunWith(Suite.class)` aggregator class.

use crate::reporter::{ReportError, Reporter};
use crate::types::{FileList, SuiteTemplate};

/// Native line terminator of the host.
pub const LINE_ENDING: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Convert a relative source path into a class literal.
///
/// Separators become `.` and the file extension is replaced by `.class`:
/// `a/b/FooTest.java` becomes `a.b.FooTest.class`.
pub fn class_reference(path: &str) -> String {
    let normalized = path.replace('\\', "/");
    let (package, file_name) = match normalized.rsplit_once('/') {
        Some((dir, file)) => (Some(dir), file),
        None => (None, normalized.as_str()),
    };

    let class_name = match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file_name,
    };

    let mut reference = String::with_capacity(normalized.len() + 6);
    if let Some(package) = package {
        for segment in package.split('/').filter(|s| !s.is_empty()) {
            reference.push_str(segment);
            reference.push('.');
        }
    }
    reference.push_str(class_name);
    reference.push_str(".class");
    reference
}

/// Renders the list as the Java source of a JUnit suite.
pub struct JunitSuiteReporter {
    template: SuiteTemplate,
}

impl JunitSuiteReporter {
    pub fn new(template: SuiteTemplate) -> Self {
        Self { template }
    }

    /// Comma-separated class literals, one per line, each line terminated.
    /// Empty for an empty list.
    fn class_block(files: &FileList) -> String {
        if files.is_empty() {
            return String::new();
        }

        let separator = format!(",{}", LINE_ENDING);
        let references: Vec<String> = files.iter().map(|p| class_reference(p)).collect();
        format!("{}{}", references.join(&separator), LINE_ENDING)
    }
}

impl Default for JunitSuiteReporter {
    fn default() -> Self {
        Self::new(SuiteTemplate::default())
    }
}

impl Reporter for JunitSuiteReporter {
    fn report(&self, files: &FileList) -> Result<String, ReportError> {
        Ok(format!(
            "package {package};{nl}\
             {nl}\
             import org.junit.runner.RunWith;{nl}\
             import org.junit.runners.Suite;{nl}\
             {nl}\
             @RunWith(Suite.class){nl}\
             @Suite.SuiteClasses({{{nl}\
             {classes}\
             }}){nl}\
             public class {class_name} {{ }}{nl}",
            package = self.template.package,
            class_name = self.template.class_name,
            classes = Self::class_block(files),
            nl = LINE_ENDING,
        ))
    }
}
