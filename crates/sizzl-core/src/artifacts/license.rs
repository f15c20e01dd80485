//! License file dispatch

use chrono::Datelike;

/// What to do with the LICENSE.md artifact for a given license name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LicenseAction {
    /// Write the MIT text
    WriteMit,
    /// Write nothing, silently
    Skip,
    /// Write nothing and warn that the license has no template
    Unsupported(String),
}

impl LicenseAction {
    pub fn for_license(license: &str) -> Self {
        match license {
            "MIT" => LicenseAction::WriteMit,
            "UNLICENSED" => LicenseAction::Skip,
            other => LicenseAction::Unsupported(other.to_string()),
        }
    }
}

/// Warning shown for [`LicenseAction::Unsupported`]
pub fn unsupported_message(license: &str) -> String {
    format!(
        "We haven't implemented logic for the {} license yet. A LICENSE.md file will not be written.",
        license
    )
}

/// MIT license text for the current calendar year
pub fn mit_text(author: &str) -> String {
    mit_text_for_year(chrono::Local::now().year(), author)
}

pub fn mit_text_for_year(year: i32, author: &str) -> String {
    format!(
        "Copyright {year} {author}

Permission is hereby granted, free of charge, to any person obtaining a copy of this software and associated documentation files (the \"Software\"), to deal in the Software without restriction, including without limitation the rights to use, copy, modify, merge, publish, distribute, sublicense, and/or sell copies of the Software, and to permit persons to whom the Software is furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED \"AS IS\", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.
"
    )
}
