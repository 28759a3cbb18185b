// greeting.rs - Platform Greeting
//
// The greeting shown on the toggle button once it has been pressed.

use std::env::consts;

/// The platform the app was built for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Platform {
    pub name: String,
}

impl Platform {
    pub fn current() -> Self {
        Self::new(consts::OS, consts::ARCH)
    }

    fn new(os: &str, arch: &str) -> Self {
        let os = match os {
            "linux" => "Linux",
            "macos" => "macOS",
            "windows" => "Windows",
            "freebsd" => "FreeBSD",
            other => other,
        };
        Self {
            name: format!("{os} {arch}"),
        }
    }
}

pub struct Greeting {
    platform: Platform,
}

impl Default for Greeting {
    fn default() -> Self {
        Self::new()
    }
}

impl Greeting {
    pub fn new() -> Self {
        Self {
            platform: Platform::current(),
        }
    }

    pub fn greet(&self) -> String {
        format!("Hello, {}!", self.platform.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_name() {
        assert_eq!(Platform::new("linux", "x86_64").name, "Linux x86_64");
        assert_eq!(Platform::new("macos", "aarch64").name, "macOS aarch64");
        assert_eq!(Platform::new("haiku", "x86_64").name, "haiku x86_64");
    }

    #[test]
    fn test_greet() {
        let greeting = Greeting {
            platform: Platform::new("windows", "x86_64"),
        };
        assert_eq!(greeting.greet(), "Hello, Windows x86_64!");
        assert!(Greeting::new().greet().starts_with("Hello, "));
    }
}
