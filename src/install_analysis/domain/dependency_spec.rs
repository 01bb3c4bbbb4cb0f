/// Extracts the package name from a raw dependency specifier
///
/// Specifiers may carry a version constraint (`libfoo>=1.0`, `libfoo=1.5`,
/// `libfoo<2.0`). The name is everything before the first `<`, `>`, `=` or
/// whitespace character.
pub fn dependency_name(specifier: &str) -> &str {
    let specifier = specifier.trim();
    let end = specifier
        .find(|c: char| c == '<' || c == '>' || c == '=' || c.is_whitespace())
        .unwrap_or(specifier.len());
    &specifier[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dependency_name_strips_constraints() {
        assert_eq!(dependency_name("libfoo>=1.0"), "libfoo");
        assert_eq!(dependency_name("libfoo<2.0"), "libfoo");
        assert_eq!(dependency_name("libfoo=1.5"), "libfoo");
        assert_eq!(dependency_name("libfoo"), "libfoo");
    }

    #[test]
    fn test_dependency_name_other_operators() {
        assert_eq!(dependency_name("glibc>2.38"), "glibc");
        assert_eq!(dependency_name("python<=3.13"), "python");
        assert_eq!(dependency_name("libcurl.so=4-64"), "libcurl.so");
    }

    #[test]
    fn test_dependency_name_whitespace() {
        assert_eq!(dependency_name("libfoo >= 1.0"), "libfoo");
        assert_eq!(dependency_name("  zlib  "), "zlib");
        assert_eq!(dependency_name("perl\t5.38"), "perl");
    }

    #[test]
    fn test_dependency_name_keeps_name_characters() {
        assert_eq!(dependency_name("gtk+"), "gtk+");
        assert_eq!(dependency_name("lib32-gcc-libs"), "lib32-gcc-libs");
        assert_eq!(dependency_name("java-runtime=21"), "java-runtime");
    }

    #[test]
    fn test_dependency_name_degenerate_input() {
        assert_eq!(dependency_name(""), "");
        assert_eq!(dependency_name(">=1.0"), "");
    }
}
