// Fixed site values. The repository address is still a placeholder and the
// clone command mirrors it; swap both in before publishing the page.

pub fn site_name() -> &'static str {
    "ClassicGame"
}

pub fn github_url() -> &'static str {
    "https://github.com/yourusername/ClassicGame"
}

pub fn releases_url() -> String {
    format!("{}/releases", github_url())
}

pub fn clone_command() -> &'static str {
    "git clone <repository-url>"
}

pub fn copy_confirmation() -> &'static str {
    "¡Copiado!"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn confirmation_label_is_well_formed() {
        // The label starts with an inverted exclamation mark, not a
        // mis-decoded byte pair.
        assert_eq!(copy_confirmation(), "¡Copiado!");
        assert!(copy_confirmation().starts_with('¡'));
    }

    #[test]
    fn clone_command_is_a_git_clone() {
        assert!(clone_command().starts_with("git clone "));
    }

    #[test]
    fn releases_link_points_into_the_repository() {
        assert_eq!(
            releases_url(),
            "https://github.com/yourusername/ClassicGame/releases"
        );
    }
}
