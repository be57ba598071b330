//! URL slug generation

use crate::constants::SLUG_SEPARATOR;

/// Turn free text into a lowercase, ASCII, dash-separated slug.
///
/// Common Latin accented letters are folded to their base letter; any other
/// run of non-alphanumeric characters becomes a single separator, and
/// separators are trimmed from both ends.
///
/// # Examples
///
/// ```
/// use lodgely_domain::utils::slug::slugify;
///
/// assert_eq!(slugify("Jérôme  Dupont"), "jerome-dupont");
/// assert_eq!(slugify("--Hello, World!--"), "hello-world");
/// assert_eq!(slugify("  "), "");
/// ```
#[must_use]
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_separator = false;

    for c in input.chars().flat_map(char::to_lowercase) {
        let folded = fold_accent(c);
        if folded.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push(SLUG_SEPARATOR);
            }
            pending_separator = false;
            slug.push(folded);
        } else if folded == 'æ' {
            push_word(&mut slug, &mut pending_separator, "ae");
        } else if folded == 'œ' {
            push_word(&mut slug, &mut pending_separator, "oe");
        } else if folded == 'ß' {
            push_word(&mut slug, &mut pending_separator, "ss");
        } else {
            pending_separator = true;
        }
    }

    slug
}

fn push_word(slug: &mut String, pending_separator: &mut bool, word: &str) {
    if *pending_separator && !slug.is_empty() {
        slug.push(SLUG_SEPARATOR);
    }
    *pending_separator = false;
    slug.push_str(word);
}

const fn fold_accent(c: char) -> char {
    match c {
        'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
        'ç' => 'c',
        'è' | 'é' | 'ê' | 'ë' => 'e',
        'ì' | 'í' | 'î' | 'ï' => 'i',
        'ñ' => 'n',
        'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' => 'o',
        'ù' | 'ú' | 'û' | 'ü' => 'u',
        'ý' | 'ÿ' => 'y',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify_lowercases_and_joins_words() {
        assert_eq!(slugify("Jane Doe"), "jane-doe");
    }

    #[test]
    fn test_slugify_collapses_separators() {
        assert_eq!(slugify("a  --  b"), "a-b");
        assert_eq!(slugify("__leading and trailing__"), "leading-and-trailing");
    }

    #[test]
    fn test_slugify_folds_accents() {
        assert_eq!(slugify("Zoë Çelik"), "zoe-celik");
        assert_eq!(slugify("Straße"), "strasse");
        assert_eq!(slugify("Lætitia"), "laetitia");
    }

    #[test]
    fn test_slugify_keeps_uuid_shape() {
        let id = "0190a5b2-7c3e-7d4f-8a1b-2c3d4e5f6a7b";
        assert_eq!(slugify(id), id);
    }

    #[test]
    fn test_slugify_drops_unsupported_scripts() {
        assert_eq!(slugify("東京"), "");
        assert_eq!(slugify("Anna 東京 B"), "anna-b");
    }
}
