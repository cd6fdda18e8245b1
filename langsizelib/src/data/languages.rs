//! Built-in language table.
//!
//! Names and colors follow GitHub Linguist so reports line up with what
//! hosting sites show. Each language lists the extensions (lowercase, no dot),
//! exact filenames and shebang interpreters that identify it.

/// One known language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageDef {
    pub name: &'static str,
    pub color: Option<&'static str>,
    pub extensions: &'static [&'static str],
    pub filenames: &'static [&'static str],
    pub interpreters: &'static [&'static str],
}

const fn lang(
    name: &'static str,
    color: Option<&'static str>,
    extensions: &'static [&'static str],
) -> LanguageDef {
    LanguageDef {
        name,
        color,
        extensions,
        filenames: &[],
        interpreters: &[],
    }
}

const fn with_filenames(def: LanguageDef, filenames: &'static [&'static str]) -> LanguageDef {
    LanguageDef { filenames, ..def }
}

const fn with_interpreters(def: LanguageDef, interpreters: &'static [&'static str]) -> LanguageDef {
    LanguageDef {
        interpreters,
        ..def
    }
}

pub static LANGUAGES: &[LanguageDef] = &[
    lang("Assembly", Some("#6E4C13"), &["asm", "s", "nasm"]),
    lang("Batchfile", Some("#C1F12E"), &["bat", "cmd"]),
    lang("C", Some("#555555"), &["c", "h"]),
    lang("C#", Some("#178600"), &["cs", "csx"]),
    lang("C++", Some("#f34b7d"), &["cpp", "cc", "cxx", "c++", "hpp", "hh", "hxx", "inl"]),
    lang("Clojure", Some("#db5855"), &["clj", "cljs", "cljc", "edn"]),
    with_filenames(lang("CMake", Some("#DA3434"), &["cmake"]), &["CMakeLists.txt"]),
    lang("CSS", Some("#563d7c"), &["css"]),
    lang("Dart", Some("#00B4AB"), &["dart"]),
    with_filenames(
        lang("Dockerfile", Some("#384d54"), &["dockerfile"]),
        &["Dockerfile", "Containerfile"],
    ),
    with_interpreters(lang("Elixir", Some("#6e4a7e"), &["ex", "exs"]), &["elixir"]),
    lang("Emacs Lisp", Some("#c065db"), &["el"]),
    with_interpreters(lang("Erlang", Some("#B83998"), &["erl", "hrl"]), &["escript"]),
    lang("F#", Some("#b845fc"), &["fs", "fsi", "fsx"]),
    lang("Go", Some("#00ADD8"), &["go"]),
    lang("Groovy", Some("#4298b8"), &["groovy", "gradle"]),
    lang("Haskell", Some("#5e5086"), &["hs", "lhs"]),
    lang("HTML", Some("#e34c26"), &["html", "htm", "xhtml"]),
    lang("Java", Some("#b07219"), &["java"]),
    with_interpreters(
        lang("JavaScript", Some("#f1e05a"), &["js", "mjs", "cjs", "jsx"]),
        &["node", "nodejs"],
    ),
    lang("JSON", Some("#292929"), &["json"]),
    with_interpreters(lang("Julia", Some("#a270ba"), &["jl"]), &["julia"]),
    lang("Kotlin", Some("#A97BFF"), &["kt", "kts"]),
    with_interpreters(lang("Lua", Some("#000080"), &["lua"]), &["lua"]),
    with_filenames(
        lang("Makefile", Some("#427819"), &["mk", "mak"]),
        &["Makefile", "makefile", "GNUmakefile"],
    ),
    lang("Markdown", Some("#083fa1"), &["md", "markdown", "mdown", "mkd"]),
    lang("Nix", Some("#7e7eff"), &["nix"]),
    lang("Objective-C", Some("#438eff"), &["m"]),
    lang("Objective-C++", Some("#6866fb"), &["mm"]),
    lang("OCaml", Some("#ef7a08"), &["ml", "mli"]),
    with_interpreters(lang("Perl", Some("#0298c3"), &["pl", "pm"]), &["perl"]),
    with_interpreters(lang("PHP", Some("#4F5D95"), &["php", "phtml"]), &["php"]),
    lang("PowerShell", Some("#012456"), &["ps1", "psm1", "psd1"]),
    lang("Protocol Buffer", None, &["proto"]),
    with_interpreters(
        with_filenames(
            lang("Python", Some("#3572A5"), &["py", "pyi", "pyw"]),
            &["SConstruct", "SConscript"],
        ),
        &["python"],
    ),
    with_interpreters(lang("R", Some("#198CE7"), &["r"]), &["Rscript"]),
    lang("reStructuredText", Some("#141414"), &["rst"]),
    with_interpreters(
        with_filenames(
            lang("Ruby", Some("#701516"), &["rb", "rake", "gemspec"]),
            &["Gemfile", "Rakefile", "Vagrantfile"],
        ),
        &["ruby"],
    ),
    lang("Rust", Some("#dea584"), &["rs"]),
    lang("Scala", Some("#c22d40"), &["scala", "sc"]),
    lang("SCSS", Some("#c6538c"), &["scss"]),
    with_interpreters(
        with_filenames(
            lang("Shell", Some("#89e051"), &["sh", "bash", "zsh", "ksh"]),
            &[".bashrc", ".bash_profile", ".profile", ".zshrc"],
        ),
        &["sh", "bash", "zsh", "ksh", "dash"],
    ),
    lang("SQL", Some("#e38c00"), &["sql"]),
    lang("Svelte", Some("#ff3e00"), &["svelte"]),
    lang("Swift", Some("#F05138"), &["swift"]),
    lang("TeX", Some("#3D6117"), &["tex", "sty", "cls"]),
    lang("Text", None, &["txt"]),
    lang("TOML", Some("#9c4221"), &["toml"]),
    lang("TypeScript", Some("#3178c6"), &["ts", "mts", "cts", "tsx"]),
    with_filenames(
        lang("Vim Script", Some("#199f4b"), &["vim"]),
        &[".vimrc", "_vimrc"],
    ),
    lang("Vue", Some("#41b883"), &["vue"]),
    lang("XML", Some("#0060ac"), &["xml", "xsd", "xsl", "svg"]),
    lang("YAML", Some("#cb171e"), &["yml", "yaml"]),
    lang("Zig", Some("#ec915c"), &["zig"]),
];
