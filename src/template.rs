//! Prompt template expansion
//!
//! Two placeholder notations refer to the same value: `$WorkDir` and
//! `{{.WorkDir}}`. The placeholder set is closed — everything else in the
//! prompt is user-authored text and passes through byte-for-byte, so this
//! is a targeted scanner rather than a template engine.

/// Expand all recognized placeholders in a prompt template.
pub fn expand(template: &str, work_dir: &str) -> String {
    let expanded = expand_dollar(template, work_dir);
    expanded.replace("{{.WorkDir}}", work_dir)
}

/// Substitute `$WorkDir`, preserving every other `$`-prefixed token.
fn expand_dollar(template: &str, work_dir: &str) -> String {
    let mut out = String::with_capacity(template.len() + work_dir.len());
    let bytes = template.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] != b'$' {
            // Copy the run up to the next sigil in one slice
            let start = i;
            while i < bytes.len() && bytes[i] != b'$' {
                i += 1;
            }
            out.push_str(&template[start..i]);
            continue;
        }

        let name_start = i + 1;
        let mut name_end = name_start;
        if name_end < bytes.len() && is_ident_start(bytes[name_end]) {
            name_end += 1;
            while name_end < bytes.len() && is_ident_continue(bytes[name_end]) {
                name_end += 1;
            }
        }

        match &template[name_start..name_end] {
            "WorkDir" => out.push_str(work_dir),
            // Unknown or absent name: keep the sigil and the token as-is
            other => {
                out.push('$');
                out.push_str(other);
            }
        }
        i = name_end;
    }

    out
}

fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_'
}

fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_without_placeholders() {
        let prompt = "You are a reviewer.\nBe thorough.";
        assert_eq!(expand(prompt, "/x"), prompt);
    }

    #[test]
    fn test_dollar_notation() {
        assert_eq!(expand("cd $WorkDir", "/home/u/proj"), "cd /home/u/proj");
    }

    #[test]
    fn test_unknown_dollar_token_preserved() {
        assert_eq!(expand("$WorkDir and $Unknown", "/x"), "/x and $Unknown");
    }

    #[test]
    fn test_bare_sigil_preserved() {
        assert_eq!(expand("costs $5, ends with $", "/x"), "costs $5, ends with $");
    }

    #[test]
    fn test_dollar_token_boundary() {
        // $WorkDirX is a different (unknown) token, not $WorkDir + "X"
        assert_eq!(expand("$WorkDirX", "/x"), "$WorkDirX");
        assert_eq!(expand("$WorkDir/src", "/x"), "/x/src");
    }

    #[test]
    fn test_braced_notation_single() {
        assert_eq!(expand("Work in {{.WorkDir}}", "/home/u/proj"), "Work in /home/u/proj");
    }

    #[test]
    fn test_braced_notation_all_occurrences() {
        assert_eq!(expand("{{.WorkDir}}/{{.WorkDir}}", "/x"), "/x//x");
    }

    #[test]
    fn test_braced_notation_zero_occurrences() {
        assert_eq!(expand("no markers here", "/x"), "no markers here");
    }

    #[test]
    fn test_replacement_value_containing_marker_does_not_loop() {
        // Adversarial workdir: the inserted value must not be re-expanded
        assert_eq!(expand("{{.WorkDir}}", "{{.WorkDir}}"), "{{.WorkDir}}");
        assert_eq!(expand("a {{.WorkDir}} b", "x{{.WorkDir}}y"), "a x{{.WorkDir}}y b");
    }

    #[test]
    fn test_both_notations_in_one_template() {
        assert_eq!(
            expand("cd $WorkDir; ls {{.WorkDir}}", "/p"),
            "cd /p; ls /p"
        );
    }

    #[test]
    fn test_multiline_prompt() {
        let prompt = "# dev\n\nYour working directory is {{.WorkDir}}.\nRun: cd {{.WorkDir}}\n";
        assert_eq!(
            expand(prompt, "/w"),
            "# dev\n\nYour working directory is /w.\nRun: cd /w\n"
        );
    }
}
