//! Well-known `languageId` values for `TextDocumentItem`.

pub const LANGUAGE_IDS: &[&str] = &[
    "abap",
    "bat",
    "bibtex",
    "blade",
    "c",
    "clojure",
    "coffeescript",
    "cpp",
    "csharp",
    "css",
    "dart",
    "diff",
    "dockerfile",
    "elixir",
    "erlang",
    "fsharp",
    "git-commit",
    "git-rebase",
    "go",
    "groovy",
    "handlebars",
    "html",
    "ini",
    "jade",
    "java",
    "javascript",
    "javascriptreact",
    "json",
    "latex",
    "less",
    "lua",
    "makefile",
    "markdown",
    "objective-c",
    "objective-cpp",
    "perl",
    "perl6",
    "php",
    "powershell",
    "python",
    "r",
    "razor",
    "ruby",
    "rust",
    "sass",
    "scala",
    "scss",
    "shaderlab",
    "shellscript",
    "sql",
    "swift",
    "tex",
    "typescript",
    "typescriptreact",
    "vb",
    "xml",
    "xsl",
    "yaml",
];

/// Identifiers are case-sensitive.
pub fn is_known_language(id: &str) -> bool {
    LANGUAGE_IDS.binary_search(&id).is_ok()
}
