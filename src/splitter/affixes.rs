//! Curated Latin/Greek affix tables from the Samurai word lists
//! (Enslen, Hill, Pollock & Vijay-Shanker, MSR'09).
//!
//! A candidate cut is suppressed when its left piece is a known prefix or
//! its right piece is a known suffix, so bound morphemes are never stranded
//! as standalone tokens ("un" is not split off "undirected").

use lazy_static::lazy_static;
use std::collections::HashSet;

const PREFIXES: &[&str] = &[
    "afro", "ambi", "amphi", "ana", "anglo", "apo", "astro", "bi", "bio", "circum", "cis", "co",
    "col", "com", "con", "contra", "cor", "cryo", "crypto", "de", "demi", "di", "dif", "dis",
    "du", "duo", "eco", "electro", "em", "en", "epi", "euro", "ex", "franco", "geo", "hemi",
    "hetero", "homo", "hydro", "hypo", "ideo", "idio", "il", "im", "infra", "inter", "intra",
    "ir", "iso", "macr", "mal", "maxi", "mega", "megalo", "micro", "midi", "mini", "mis", "mon",
    "multi", "neo", "omni", "paleo", "para", "ped", "peri", "poly", "pre", "preter", "proto",
    "pyro", "re", "retro", "semi", "socio", "supra", "sur", "sy", "syl", "sym", "syn", "tele",
    "trans", "tri", "twi", "ultra", "un", "uni",
];

const SUFFIXES: &[&str] = &[
    "a", "ac", "acea", "aceae", "acean", "aceous", "ade", "aemia", "agogue", "aholic", "al",
    "ales", "algia", "amine", "ana", "anae", "ance", "ancy", "androus", "andry", "ane", "ar",
    "archy", "ard", "aria", "arian", "arium", "ary", "ase", "athon", "ation", "ative", "ator",
    "atory", "biont", "biosis", "cade", "caine", "carp", "carpic", "carpous", "cele", "cene",
    "centric", "cephalic", "cephalous", "cephaly", "chory", "chrome", "cide", "clast", "clinal",
    "cline", "coccus", "coel", "coele", "colous", "cracy", "crat", "cratic", "cratical", "cy",
    "cyte", "derm", "derma", "dermatous", "dom", "drome", "dromous", "eae", "ectomy", "ed", "ee",
    "eer", "ein", "eme", "emia", "en", "ence", "enchyma", "ency", "ene", "ent", "eous", "er",
    "ergic", "ergy", "es", "escence", "escent", "ese", "esque", "ess", "est", "et", "eth",
    "etic", "ette", "ey", "facient", "fer", "ferous", "fic", "fication", "fid", "florous",
    "foliate", "foliolate", "fuge", "ful", "fy", "gamous", "gamy", "gen", "genesis", "genic",
    "genous", "geny", "gnathous", "gon", "gony", "grapher", "graphy", "gyne", "gynous", "gyny",
    "ia", "ial", "ian", "iana", "iasis", "iatric", "iatrics", "iatry", "ibility", "ible", "ic",
    "icide", "ician", "ics", "idae", "ide", "ie", "ify", "ile", "ina", "inae", "ine", "ineae",
    "ing", "ini", "ious", "isation", "ise", "ish", "ism", "ist", "istic", "istical",
    "istically", "ite", "itious", "itis", "ity", "ium", "ive", "ization", "ize", "kinesis",
    "kins", "latry", "lepry", "ling", "lite", "lith", "lithic", "logue", "logist", "logy", "ly",
    "lyse", "lysis", "lyte", "lytic", "lyze", "mancy", "mania", "meister", "ment", "merous",
    "metry", "mo", "morph", "morphic", "morphism", "morphous", "mycete", "mycetes", "mycetidae",
    "mycin", "mycota", "mycotina", "ness", "nik", "nomy", "odon", "odont", "odontia", "oholic",
    "oic", "oid", "oidea", "oideae", "ol", "ole", "oma", "ome", "ont", "onym", "onymy", "opia",
    "opsida", "opsis", "opsy", "orama", "ory", "ose", "osis", "otic", "otomy", "ous", "para",
    "parous", "pathy", "ped", "pede", "penia", "phage", "phagia", "phagous", "phagy", "phane",
    "phasia", "phil", "phile", "philia", "philiac", "philic", "philous", "phobe", "phobia",
    "phobic", "phony", "phore", "phoresis", "phorous", "phrenia", "phyll", "phyllous", "phyceae",
    "phycidae", "phyta", "phyte", "phytina", "plasia", "plasm", "plast", "plasty", "plegia",
    "plex", "ploid", "pode", "podous", "poieses", "poietic", "pter", "rrhagia", "rrhea", "ric",
    "ry", "s", "scopy", "sepalous", "sperm", "sporous", "st", "stasis", "stat", "ster", "stome",
    "stomy", "taxy", "th", "therm", "thermal", "thermic", "thermy", "thon", "thymia", "tion",
    "tome", "tomy", "tonia", "trichous", "trix", "tron", "trophic", "tropism", "tropous",
    "tropy", "tude", "ty", "ular", "ule", "ure", "urgy", "uria", "uronic", "urous", "valent",
    "virile", "vorous", "xor", "y", "yl", "yne", "zoic", "zoon", "zygous", "zyme",
];

lazy_static! {
    static ref PREFIX_SET: HashSet<&'static str> = PREFIXES.iter().copied().collect();
    static ref SUFFIX_SET: HashSet<&'static str> = SUFFIXES.iter().copied().collect();
}

/// Case-insensitive exact-match test against the prefix table.
pub fn is_prefix(s: &str) -> bool {
    PREFIX_SET.contains(s.to_lowercase().as_str())
}

/// Case-insensitive exact-match test against the suffix table.
pub fn is_suffix(s: &str) -> bool {
    SUFFIX_SET.contains(s.to_lowercase().as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_membership() {
        assert!(is_prefix("un"));
        assert!(is_prefix("RE"));
        assert!(is_prefix("micro"));
        assert!(!is_prefix("auto"));
        assert!(!is_prefix(""));
    }

    #[test]
    fn test_suffix_membership() {
        assert!(is_suffix("ing"));
        assert!(is_suffix("s"));
        assert!(is_suffix("LOGY"));
        assert!(!is_suffix("data"));
        assert!(!is_suffix(""));
    }

    #[test]
    fn test_exact_match_not_substring() {
        // Membership is whole-string, not prefix-of-string
        assert!(!is_prefix("unless"));
        assert!(!is_suffix("kings"));
    }
}
