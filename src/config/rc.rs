use log::debug;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    /// Spaces that make up one indent level.
    pub tab_stop: usize,
    /// Indent with `tab_stop` spaces instead of a tab.
    pub expand_tab: bool,
    pub max_indent: usize,
    pub multi_click_ms: u64,
    pub max_undo_levels: usize,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tab_stop: 4,
            expand_tab: false,
            max_indent: 3,
            multi_click_ms: 500,
            max_undo_levels: 1000,
        }
    }
}

impl EditorConfig {
    pub fn multi_click_threshold(&self) -> Duration {
        Duration::from_millis(self.multi_click_ms)
    }
}

pub struct RcLoader;

impl RcLoader {
    /// Get the path to the RC file
    /// Looks for .slidelinesrc in:
    /// 1. Current directory
    /// 2. Home directory (~/.slidelinesrc)
    pub fn get_rc_path() -> Option<PathBuf> {
        let current_rc = Path::new(".slidelinesrc");
        if current_rc.exists() {
            return Some(current_rc.to_path_buf());
        }

        if let Ok(home) = env::var("HOME") {
            let home_rc = Path::new(&home).join(".slidelinesrc");
            if home_rc.exists() {
                return Some(home_rc);
            }
        }

        None
    }

    /// Load the RC file if there is one; defaults otherwise
    pub fn load_config() -> EditorConfig {
        match Self::get_rc_path() {
            Some(rc_path) => Self::load_from(&rc_path).unwrap_or_else(|e| {
                debug!("could not read {}: {e}", rc_path.display());
                EditorConfig::default()
            }),
            None => EditorConfig::default(),
        }
    }

    pub fn load_from(path: &Path) -> Result<EditorConfig, std::io::Error> {
        let content = fs::read_to_string(path)?;
        let mut config = EditorConfig::default();
        Self::parse_config_content(&content, &mut config);
        Ok(config)
    }

    fn parse_config_content(content: &str, config: &mut EditorConfig) {
        for line in content.lines() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') || line.starts_with('"') {
                continue;
            }

            Self::parse_config_line(line, config);
        }
    }

    fn parse_config_line(line: &str, config: &mut EditorConfig) {
        // Remove inline comments
        let line = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        }
        .trim();

        if let Some(stripped) = line.strip_prefix("set ") {
            let setting = stripped.trim();
            match setting {
                "expandtab" => config.expand_tab = true,
                "noexpandtab" => config.expand_tab = false,
                _ => match setting.split_once('=') {
                    Some((key, value)) => Self::apply_setting(key.trim(), value.trim(), config),
                    None => debug!("unknown setting: {setting}"),
                },
            }
        } else if let Some((key, value)) = line.split_once('=') {
            Self::apply_setting(key.trim(), value.trim(), config);
        } else {
            debug!("ignoring rc line: {line}");
        }
    }

    fn apply_setting(key: &str, value: &str, config: &mut EditorConfig) {
        match key {
            "tabstop" | "tab_stop" => match value.parse::<usize>() {
                Ok(tab_stop) if (1..=16).contains(&tab_stop) => config.tab_stop = tab_stop,
                _ => debug!("invalid tab stop: {value}"),
            },
            "expandtab" | "expand_tab" => match Self::parse_bool(value) {
                Some(expand) => config.expand_tab = expand,
                None => debug!("invalid expand_tab: {value}"),
            },
            "maxindent" | "max_indent" => match value.parse::<usize>() {
                Ok(max_indent) if max_indent <= 8 => config.max_indent = max_indent,
                _ => debug!("invalid max_indent: {value}"),
            },
            "multiclick" | "multi_click_ms" => match value.parse::<u64>() {
                Ok(ms) if ms > 0 => config.multi_click_ms = ms,
                _ => debug!("invalid multi_click_ms: {value}"),
            },
            "undolevels" | "undo_levels" => match value.parse::<usize>() {
                Ok(levels) => config.max_undo_levels = levels,
                Err(_) => debug!("invalid undo_levels: {value}"),
            },
            _ => debug!("unknown setting: {key}"),
        }
    }

    fn parse_bool(value: &str) -> Option<bool> {
        match value {
            "true" | "yes" | "on" | "1" => Some(true),
            "false" | "no" | "off" | "0" => Some(false),
            _ => None,
        }
    }

    /// Generate a sample RC file content
    pub fn generate_sample_rc() -> String {
        r#"# slide-lines configuration file (.slidelinesrc)
# Lines starting with # or " are comments

# Indentation
set tabstop=4          # Spaces per indent level
set noexpandtab        # Indent with tabs (or set expandtab)
max_indent=3           # Deepest indent level Tab will reach

# Pointer
multi_click_ms=500     # Window for double and triple clicks

# History
undo_levels=1000
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_vim_style_config() {
        let mut config = EditorConfig::default();
        let content = r#"
            set tabstop=8
            set expandtab
            set max_indent=2
        "#;

        RcLoader::parse_config_content(content, &mut config);

        assert!(config.expand_tab);
        assert_eq!(config.tab_stop, 8);
        assert_eq!(config.max_indent, 2);
    }

    #[test]
    fn test_parse_key_value_config() {
        let mut config = EditorConfig::default();
        let content = r#"
            tab_stop=2
            expand_tab=yes
            multi_click_ms=350
            undo_levels=20
        "#;

        RcLoader::parse_config_content(content, &mut config);

        assert!(config.expand_tab);
        assert_eq!(config.tab_stop, 2);
        assert_eq!(config.multi_click_ms, 350);
        assert_eq!(config.max_undo_levels, 20);
        assert_eq!(config.multi_click_threshold(), Duration::from_millis(350));
    }

    #[test]
    fn test_parse_mixed_config_with_comments() {
        let mut config = EditorConfig::default();
        let content = r#"
            # This is a comment
            " This is also a comment
            tabstop=6              # Custom tab stop
            # set expandtab        # This is commented out
        "#;

        RcLoader::parse_config_content(content, &mut config);

        assert!(!config.expand_tab);
        assert_eq!(config.tab_stop, 6);
    }

    #[test]
    fn test_invalid_values_ignored() {
        let mut config = EditorConfig::default();
        let content = r#"
            set tabstop=0
            set tabstop=20
            tabstop=invalid
            max_indent=99
            multi_click_ms=0
            expand_tab=maybe
            unknown_setting=value
        "#;

        RcLoader::parse_config_content(content, &mut config);

        assert_eq!(config, EditorConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, RcLoader::generate_sample_rc().as_bytes()).unwrap();

        let config = RcLoader::load_from(file.path()).unwrap();
        assert_eq!(config, EditorConfig::default());
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(RcLoader::load_from(&dir.path().join("missing")).is_err());
    }
}
