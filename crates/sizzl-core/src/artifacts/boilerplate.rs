//! Static file contents

/// Page written to both `site/host/index.html` and `site/host/404.html`
pub const HTML_PAGE: &str = "<!DOCTYPE html>
<html>
\t<head>
\t\t<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">
\t\t<title></title>
\t</head>
\t<body>

\t</body>
</html>
";

pub fn readme(name: &str, description: &str) -> String {
    format!("# {}\n> {}\n", name, description)
}
