//! Single-token flag parsing

/// Help listing printed for the `h` flag
pub const HELP_TEXT: &str = r#"Available Flags:

h - Displays the help menu and exits the program.

d - Skips questions with default values.

r - Creates a boilerplate README.md file.

l - Creates a LICENSE.md file.

w - Creates a web directory with boilerplate index.html and 404.html files.

t - Creates a tests directory with an empty test.js file.

n - Creates a lib directory with an empty index.js file, intended for writing Node.js.

Examples:

Initialize a workspace with a README.md file, LICENSE.md file, test files, and Node.js boilerplate directory. Skip all defaults.
sizzl rltnd

Initialize a workspace with a Node.js boilerplate directory and boilerplate web application files.
sizzl nw
"#;

/// Toggles read from the combined flag token (e.g. `rltnd`)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    /// `h`: print help and exit
    pub help: bool,
    /// `d`: use defaults without prompting
    pub skip_defaults: bool,
    /// `r`: write README.md
    pub readme: bool,
    /// `l`: write LICENSE.md
    pub license: bool,
    /// `w`: write the site/host web skeleton
    pub web_app: bool,
    /// `t`: write tests/test.js
    pub tests: bool,
    /// `n`: write lib/index.js
    pub lib_dir: bool,
}

impl Flags {
    /// Parse a flag token. Unknown letters are ignored; no token means all off.
    pub fn from_token(token: Option<&str>) -> Self {
        let mut flags = Flags::default();
        let Some(token) = token else {
            return flags;
        };

        for c in token.chars() {
            match c {
                'h' => flags.help = true,
                'd' => flags.skip_defaults = true,
                'r' => flags.readme = true,
                'l' => flags.license = true,
                'w' => flags.web_app = true,
                't' => flags.tests = true,
                'n' => flags.lib_dir = true,
                _ => {}
            }
        }

        flags
    }
}
