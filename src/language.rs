//! Static per-language metadata: source filenames, harness templates and
//! compile-and-run command lines.

use std::fmt;
use std::path::Path;

use crate::harness;

/// Languages the service knows by name.
///
/// `C` has a filename mapping but no runnable profile; submitting it yields
/// an unsupported-language failure like any unknown name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Javascript,
    Python,
    Cpp,
    Java,
    Rust,
    C,
}

impl Language {
    pub fn parse(name: &str) -> Option<Language> {
        match name {
            "javascript" => Some(Language::Javascript),
            "python" => Some(Language::Python),
            "cpp" => Some(Language::Cpp),
            "java" => Some(Language::Java),
            "rust" => Some(Language::Rust),
            "c" => Some(Language::C),
            _ => None,
        }
    }

    pub fn filename(self) -> &'static str {
        match self {
            Language::Javascript => "code.js",
            Language::Python => "code.py",
            Language::Cpp => "code.cpp",
            Language::Java => "Main.java",
            Language::Rust => "main.rs",
            Language::C => "code.c",
        }
    }

    /// Profile for a runnable language, `None` otherwise.
    pub fn profile(self) -> Option<&'static LanguageProfile> {
        PROFILES.iter().find(|p| p.language == self)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Language::Javascript => "javascript",
            Language::Python => "python",
            Language::Cpp => "cpp",
            Language::Java => "java",
            Language::Rust => "rust",
            Language::C => "c",
        };
        f.write_str(name)
    }
}

/// Read-only per-language execution profile. One instance per runnable
/// language, process-wide.
pub struct LanguageProfile {
    pub language: Language,
    pub filename: &'static str,
    pub(crate) template: &'static str,
    command: fn(&Path) -> String,
}

impl LanguageProfile {
    /// Shell command that compiles (when needed) and runs the source inside
    /// `dir`. Compile and run stages are joined with `&&` so the run stage
    /// only starts after a clean compile.
    pub fn command(&self, dir: &Path) -> String {
        (self.command)(dir)
    }
}

static PROFILES: [LanguageProfile; 5] = [
    LanguageProfile {
        language: Language::Python,
        filename: "code.py",
        template: harness::PYTHON_TEMPLATE,
        command: python_command,
    },
    LanguageProfile {
        language: Language::Javascript,
        filename: "code.js",
        template: harness::JAVASCRIPT_TEMPLATE,
        command: javascript_command,
    },
    LanguageProfile {
        language: Language::Cpp,
        filename: "code.cpp",
        template: harness::CPP_TEMPLATE,
        command: cpp_command,
    },
    LanguageProfile {
        language: Language::Java,
        filename: "Main.java",
        template: harness::JAVA_TEMPLATE,
        command: java_command,
    },
    LanguageProfile {
        language: Language::Rust,
        filename: "main.rs",
        template: harness::RUST_TEMPLATE,
        command: rust_command,
    },
];

fn python_command(dir: &Path) -> String {
    format!("python3 \"{}\"", dir.join("code.py").display())
}

fn javascript_command(dir: &Path) -> String {
    format!("node \"{}\"", dir.join("code.js").display())
}

fn cpp_command(dir: &Path) -> String {
    let src = dir.join("code.cpp");
    let bin = dir.join("main");
    format!(
        "g++ \"{}\" -o \"{}\" && \"{}\"",
        src.display(),
        bin.display(),
        bin.display()
    )
}

fn java_command(dir: &Path) -> String {
    let src = dir.join("Main.java");
    format!(
        "javac \"{}\" && java -cp \"{}\" Main",
        src.display(),
        dir.display()
    )
}

fn rust_command(dir: &Path) -> String {
    let src = dir.join("main.rs");
    let bin = dir.join("main");
    format!(
        "rustc \"{}\" -o \"{}\" && \"{}\"",
        src.display(),
        bin.display(),
        bin.display()
    )
}
