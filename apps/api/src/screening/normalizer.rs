//! Normalizer — lowercases, drops stopwords and punctuation, reduces tokens to base forms.
//!
//! The output feeds skill detection and TF-IDF vectorization. Experience
//! extraction works on lowercased raw text instead, since numbers, dashes and
//! month names must survive.

/// Characters kept inside a token because technical terms use them
/// (`c++`, `c#`, `node.js`, `ci/cd`, `e-mail`).
const INNER_TOKEN_CHARS: &[char] = &['+', '#', '.', '-', '/', '\''];

/// Trimmed from token edges. `+` and `#` are not, so `c++` and `c#` survive.
const EDGE_TRIM_CHARS: &[char] = &['.', '-', '/', '\''];

const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "all", "almost", "alone", "along",
    "already", "also", "although", "always", "am", "among", "an", "and", "another", "any",
    "anyone", "anything", "anyway", "anywhere", "are", "around", "as", "at", "be", "became",
    "because", "become", "becomes", "been", "before", "being", "below", "beside", "besides",
    "between", "beyond", "both", "but", "by", "can", "cannot", "could", "did", "do", "does",
    "doing", "done", "down", "due", "during", "each", "either", "else", "elsewhere", "enough",
    "etc", "even", "ever", "every", "everyone", "everything", "everywhere", "except", "few",
    "for", "former", "from", "further", "had", "has", "have", "having", "he", "hence", "her",
    "here", "hers", "herself", "him", "himself", "his", "how", "however", "i", "if", "in",
    "indeed", "into", "is", "it", "its", "itself", "just", "least", "less", "many", "may",
    "me", "meanwhile", "might", "mine", "more", "moreover", "most", "mostly", "much", "must",
    "my", "myself", "neither", "never", "nevertheless", "next", "no", "nobody", "none", "nor",
    "not", "nothing", "now", "nowhere", "of", "off", "often", "on", "once", "one", "only",
    "onto", "or", "other", "others", "otherwise", "our", "ours", "ourselves", "out", "over",
    "own", "per", "perhaps", "please", "quite", "rather", "really", "same", "several", "she",
    "should", "since", "so", "some", "somehow", "someone", "something", "sometimes",
    "somewhere", "still", "such", "than", "that", "the", "their", "theirs", "them",
    "themselves", "then", "there", "thereby", "therefore", "these", "they", "this", "those",
    "though", "through", "throughout", "thus", "to", "together", "too", "toward", "towards",
    "under", "unless", "until", "up", "upon", "us", "very", "via", "was", "we", "well", "were",
    "what", "whatever", "when", "whenever", "where", "whereas", "wherever", "whether",
    "which", "while", "who", "whoever", "whole", "whom", "whose", "why", "will", "with",
    "within", "without", "would", "yet", "you", "your", "yours", "yourself", "yourselves",
];

/// Irregular inflections mapped to their dictionary form.
const IRREGULAR_FORMS: &[(&str, &str)] = &[
    ("began", "begin"),
    ("begun", "begin"),
    ("bought", "buy"),
    ("brought", "bring"),
    ("built", "build"),
    ("children", "child"),
    ("chose", "choose"),
    ("chosen", "choose"),
    ("drove", "drive"),
    ("driven", "drive"),
    ("feet", "foot"),
    ("gave", "give"),
    ("given", "give"),
    ("gone", "go"),
    ("went", "go"),
    ("grew", "grow"),
    ("grown", "grow"),
    ("held", "hold"),
    ("kept", "keep"),
    ("knew", "know"),
    ("known", "know"),
    ("led", "lead"),
    ("made", "make"),
    ("men", "man"),
    ("ran", "run"),
    ("running", "run"),
    ("sought", "seek"),
    ("spoke", "speak"),
    ("spoken", "speak"),
    ("taught", "teach"),
    ("took", "take"),
    ("taken", "take"),
    ("thought", "think"),
    ("women", "woman"),
    ("won", "win"),
    ("wrote", "write"),
    ("written", "write"),
];

/// Words ending in `s` that are already singular (or are proper names).
const NOT_PLURAL: &[&str] = &[
    "always", "analysis", "aws", "basis", "business", "canvas", "christmas", "diagnosis",
    "emphasis", "ethics", "jenkins", "kubernetes", "lens", "mathematics", "news", "pandas",
    "physics", "postgres", "redis", "sales", "series", "species", "statistics", "status",
    "thesis", "windows",
];

/// Words ending in `ed` that are not past tenses.
const NOT_PAST_TENSE: &[&str] = &[
    "bred", "embed", "hundred", "kindred", "naked", "ragged", "rugged", "sacred", "shred",
    "wicked",
];

/// Stem endings that take back a silent `e` once `-ed` is removed
/// (`managed` → `manage`, `optimized` → `optimize`, `secured` → `secure`).
const SILENT_E_ENDINGS: &[&str] = &[
    "at", "ut", "iz", "yz", "ys", "as", "us", "ur", "ir", "ud", "um", "ok", "bl", "dl", "gl",
    "kl", "pl", "tl", "c", "g", "v",
];

/// Normalizes raw text into space-joined lemmas in original order.
pub fn normalize(text: &str) -> String {
    tokenize(&text.to_lowercase())
        .filter(|token| !is_stop_word(token))
        .map(lemmatize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Splits lowercased text into tokens, dropping pure punctuation.
fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !(c.is_alphanumeric() || INNER_TOKEN_CHARS.contains(&c)))
        .map(|raw| raw.trim_matches(EDGE_TRIM_CHARS))
        .filter(|token| token.chars().any(|c| c.is_alphanumeric()))
}

fn is_stop_word(token: &str) -> bool {
    STOP_WORDS.contains(&token)
}

/// Reduces one lowercase token to its base form.
pub fn lemmatize(token: &str) -> String {
    if token.chars().any(|c| c.is_ascii_digit()) {
        return token.to_string();
    }

    let token = token.strip_suffix("'s").unwrap_or(token);

    if let Some((_, base)) = IRREGULAR_FORMS.iter().find(|(form, _)| *form == token) {
        return base.to_string();
    }

    if token.ends_with("ed") {
        return past_tense_base(token);
    }
    singularize(token)
}

/// Regular past tense to base verb: `studied` → `study`, `planned` → `plan`,
/// `managed` → `manage`, `deployed` → `deploy`.
fn past_tense_base(word: &str) -> String {
    if word.len() < 5
        || word.ends_with("eed")
        || NOT_PAST_TENSE.contains(&word)
        || !word.chars().all(|c| c.is_ascii_alphabetic())
    {
        return word.to_string();
    }

    if let Some(stem) = word.strip_suffix("ied") {
        return format!("{stem}y");
    }

    let stem = &word[..word.len() - 2];
    let bytes = stem.as_bytes();
    let last = bytes[bytes.len() - 1];
    let before = bytes[bytes.len() - 2];

    // shipped, planned; but installed, passed, buzzed keep the double letter
    if last == before && !is_vowel(last) && !matches!(last, b'l' | b's' | b'z') {
        return stem[..stem.len() - 1].to_string();
    }

    let takes_e = SILENT_E_ENDINGS.iter().any(|ending| stem.ends_with(ending))
        // combined, defined; not trained, joined
        || (stem.ends_with("in") && !is_vowel(bytes[bytes.len() - 3]))
        // provided, decided; not avoided
        || (stem.ends_with("id") && bytes[bytes.len() - 3] != b'o')
        // shared, prepared; not cleared
        || (stem.ends_with("ar") && bytes[bytes.len() - 3] != b'e');

    if takes_e {
        format!("{stem}e")
    } else {
        stem.to_string()
    }
}

fn is_vowel(byte: u8) -> bool {
    matches!(byte, b'a' | b'e' | b'i' | b'o' | b'u')
}

fn singularize(word: &str) -> String {
    if word.len() <= 3 || !word.ends_with('s') || NOT_PLURAL.contains(&word) {
        return word.to_string();
    }
    // node.js, ci/cd
    if !word.chars().all(char::is_alphabetic) {
        return word.to_string();
    }
    // -ss (process), -us (status), -is (analysis) are not plural endings.
    if word.ends_with("ss") || word.ends_with("us") || word.ends_with("is") {
        return word.to_string();
    }

    if let Some(stem) = word.strip_suffix("ies") {
        if stem.len() >= 2 {
            return format!("{stem}y");
        }
    }

    for sibilant in ["sses", "xes", "zes", "ches", "shes"] {
        if word.ends_with(sibilant) {
            return word[..word.len() - 2].to_string();
        }
    }

    word[..word.len() - 1].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screening::skills::DEFAULT_SKILLS;

    #[test]
    fn test_lowercases_and_drops_stopwords_and_punctuation() {
        let normalized = normalize("The Engineer, with a passion for Python!");
        assert_eq!(normalized, "engineer passion python");
    }

    #[test]
    fn test_preserves_order_and_single_spacing() {
        let normalized = normalize("  SQL   --  Excel \n\n Azure ");
        assert_eq!(normalized, "sql excel azure");
    }

    #[test]
    fn test_plurals_reduced_to_base_form() {
        assert_eq!(lemmatize("skills"), "skill");
        assert_eq!(lemmatize("technologies"), "technology");
        assert_eq!(lemmatize("processes"), "process");
        assert_eq!(lemmatize("matches"), "match");
        assert_eq!(lemmatize("years"), "year");
    }

    #[test]
    fn test_singular_words_ending_in_s_untouched() {
        for word in ["analysis", "aws", "business", "status", "kubernetes", "process"] {
            assert_eq!(lemmatize(word), word);
        }
    }

    #[test]
    fn test_irregular_forms() {
        assert_eq!(lemmatize("led"), "lead");
        assert_eq!(lemmatize("built"), "build");
        assert_eq!(lemmatize("running"), "run");
    }

    #[test]
    fn test_regular_past_tense_reduced() {
        assert_eq!(lemmatize("managed"), "manage");
        assert_eq!(lemmatize("optimized"), "optimize");
        assert_eq!(lemmatize("created"), "create");
        assert_eq!(lemmatize("combined"), "combine");
        assert_eq!(lemmatize("provided"), "provide");
        assert_eq!(lemmatize("studied"), "study");
        assert_eq!(lemmatize("planned"), "plan");
        assert_eq!(lemmatize("deployed"), "deploy");
        assert_eq!(lemmatize("worked"), "work");
        assert_eq!(lemmatize("trained"), "train");
        assert_eq!(lemmatize("installed"), "install");
        assert_eq!(lemmatize("processed"), "process");
    }

    #[test]
    fn test_ed_words_that_are_not_past_tense() {
        for word in ["need", "speed", "proceed", "embed", "hundred", "red", "used3"] {
            assert_eq!(lemmatize(word), word);
        }
    }

    #[test]
    fn test_past_and_present_share_a_lemma() {
        assert_eq!(normalize("Managed teams"), normalize("manage team"));
    }

    #[test]
    fn test_possessive_removed() {
        assert_eq!(normalize("Company's platform"), "company platform");
    }

    #[test]
    fn test_technical_tokens_survive() {
        assert_eq!(normalize("C++, C# and Node.js (CI/CD)."), "c++ c# node.js ci/cd");
    }

    #[test]
    fn test_numeric_tokens_kept_verbatim() {
        assert_eq!(normalize("3-5 years"), "3-5 year");
    }

    #[test]
    fn test_multiword_skills_stay_contiguous() {
        let normalized = normalize("Strong machine learning and data analysis; Power BI dashboards");
        assert!(normalized.contains("machine learning"));
        assert!(normalized.contains("data analysis"));
        assert!(normalized.contains("power bi"));
    }

    #[test]
    fn test_skill_vocabulary_is_not_stopworded() {
        for skill in DEFAULT_SKILLS {
            for word in skill.split_whitespace() {
                assert!(!is_stop_word(word), "'{word}' is a stop word");
            }
        }
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" ... !!! "), "");
    }
}
