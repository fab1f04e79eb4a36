//! Static word tables backing the lexicon scorer.
//!
//! Valences are on the [-4, 4] scale conventional for compound sentiment
//! lexicons; the scorer normalizes sums into [-1, 1]. The vocabulary leans
//! toward financial news since that is what the fetcher returns.

use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};

/// Shift applied by an intensifying degree adverb.
pub const BOOST_INCR: f64 = 0.293;
/// Shift applied by a dampening degree adverb.
pub const BOOST_DECR: f64 = -0.293;

static WORD_VALENCES: &[(&str, f64)] = &[
    // general positive
    ("good", 1.9),
    ("great", 3.1),
    ("excellent", 2.7),
    ("amazing", 2.8),
    ("best", 3.2),
    ("better", 1.9),
    ("win", 2.8),
    ("wins", 2.7),
    ("won", 2.7),
    ("winner", 2.8),
    ("success", 2.7),
    ("successful", 2.6),
    ("strong", 2.3),
    ("stronger", 2.2),
    ("strongest", 2.4),
    ("positive", 2.3),
    ("happy", 2.7),
    ("optimistic", 1.9),
    ("optimism", 1.8),
    ("impressive", 2.4),
    ("outstanding", 3.0),
    ("promising", 2.0),
    ("innovative", 2.3),
    ("robust", 1.9),
    ("solid", 1.6),
    ("upbeat", 1.9),
    ("confident", 2.2),
    ("confidence", 1.9),
    ("benefit", 2.0),
    ("benefits", 1.8),
    ("opportunity", 1.6),
    ("opportunities", 1.5),
    ("wonderful", 2.7),
    ("favorable", 2.0),
    ("praise", 2.2),
    ("praised", 2.3),
    // finance positive
    ("rally", 1.9),
    ("rallies", 1.8),
    ("rallied", 1.9),
    ("surge", 1.8),
    ("surges", 1.7),
    ("surged", 1.8),
    ("soar", 2.1),
    ("soars", 2.0),
    ("soared", 2.1),
    ("gain", 1.7),
    ("gains", 1.6),
    ("gained", 1.7),
    ("climb", 1.3),
    ("climbs", 1.2),
    ("climbed", 1.3),
    ("jump", 1.4),
    ("jumps", 1.3),
    ("jumped", 1.4),
    ("record", 1.5),
    ("beat", 1.8),
    ("beats", 1.7),
    ("profit", 2.0),
    ("profits", 1.9),
    ("profitable", 2.2),
    ("growth", 1.8),
    ("grow", 1.4),
    ("grows", 1.3),
    ("grew", 1.4),
    ("boost", 1.7),
    ("boosts", 1.6),
    ("boosted", 1.7),
    ("upgrade", 1.8),
    ("upgraded", 1.9),
    ("upgrades", 1.7),
    ("outperform", 2.0),
    ("outperforms", 1.9),
    ("outperformed", 2.0),
    ("breakthrough", 2.3),
    ("milestone", 1.6),
    ("recovery", 1.6),
    ("recover", 1.4),
    ("recovers", 1.3),
    ("recovered", 1.5),
    ("rebound", 1.5),
    ("rebounds", 1.4),
    ("rebounded", 1.5),
    ("expand", 1.3),
    ("expands", 1.2),
    ("expansion", 1.4),
    ("exceed", 1.7),
    ("exceeds", 1.6),
    ("exceeded", 1.7),
    ("improve", 1.9),
    ("improves", 1.8),
    ("improved", 2.1),
    ("improvement", 2.0),
    ("bullish", 2.4),
    // general negative
    ("bad", -2.5),
    ("worst", -3.1),
    ("worse", -2.1),
    ("terrible", -2.1),
    ("awful", -2.0),
    ("horrible", -2.5),
    ("poor", -2.1),
    ("fail", -2.5),
    ("fails", -2.3),
    ("failed", -2.5),
    ("failure", -2.5),
    ("failures", -2.4),
    ("problem", -1.7),
    ("problems", -1.8),
    ("trouble", -1.9),
    ("troubled", -2.0),
    ("weak", -1.9),
    ("weaker", -1.8),
    ("weakest", -2.0),
    ("negative", -2.7),
    ("fear", -2.2),
    ("fears", -2.1),
    ("worry", -1.6),
    ("worries", -1.5),
    ("worried", -1.8),
    ("concern", -1.1),
    ("concerns", -1.2),
    ("warning", -1.6),
    ("warn", -1.4),
    ("warns", -1.4),
    ("warned", -1.5),
    ("threat", -1.9),
    ("threats", -1.8),
    ("crisis", -3.1),
    ("doubt", -1.5),
    ("doubts", -1.4),
    ("uncertain", -1.4),
    ("uncertainty", -1.5),
    ("disappointing", -2.2),
    ("disappoints", -2.0),
    ("disappointed", -2.1),
    ("disappointment", -2.2),
    ("risk", -1.1),
    ("risks", -1.0),
    ("risky", -1.4),
    // finance negative
    ("plunge", -2.2),
    ("plunges", -2.1),
    ("plunged", -2.2),
    ("crash", -2.6),
    ("crashes", -2.5),
    ("crashed", -2.6),
    ("slump", -1.9),
    ("slumps", -1.8),
    ("slumped", -1.9),
    ("tumble", -1.8),
    ("tumbles", -1.7),
    ("tumbled", -1.8),
    ("fall", -1.3),
    ("falls", -1.2),
    ("fell", -1.3),
    ("drop", -1.2),
    ("drops", -1.1),
    ("dropped", -1.2),
    ("decline", -1.5),
    ("declines", -1.4),
    ("declined", -1.5),
    ("loss", -2.1),
    ("losses", -2.0),
    ("lose", -2.0),
    ("loses", -1.9),
    ("lost", -1.9),
    ("miss", -1.4),
    ("misses", -1.3),
    ("missed", -1.4),
    ("downgrade", -1.8),
    ("downgraded", -1.9),
    ("downgrades", -1.7),
    ("lawsuit", -1.6),
    ("lawsuits", -1.5),
    ("sue", -1.6),
    ("sues", -1.6),
    ("sued", -1.7),
    ("fraud", -3.0),
    ("scandal", -2.4),
    ("bankruptcy", -2.9),
    ("bankrupt", -2.8),
    ("layoff", -2.0),
    ("layoffs", -2.1),
    ("recall", -1.4),
    ("recalls", -1.3),
    ("recalled", -1.4),
    ("debt", -1.4),
    ("default", -1.8),
    ("defaults", -1.7),
    ("penalty", -1.6),
    ("fined", -1.7),
    ("fines", -1.6),
    ("investigation", -1.3),
    ("investigations", -1.2),
    ("probe", -1.1),
    ("probes", -1.0),
    ("selloff", -2.0),
    ("bearish", -2.1),
    ("volatile", -1.2),
    ("volatility", -1.1),
    ("shortfall", -1.7),
    ("halt", -1.3),
    ("halted", -1.4),
    ("delay", -1.2),
    ("delays", -1.3),
    ("delayed", -1.3),
    ("cut", -1.0),
    ("cuts", -1.1),
];

static BOOSTER_VALUES: &[(&str, f64)] = &[
    ("very", BOOST_INCR),
    ("really", BOOST_INCR),
    ("extremely", BOOST_INCR),
    ("incredibly", BOOST_INCR),
    ("hugely", BOOST_INCR),
    ("enormously", BOOST_INCR),
    ("especially", BOOST_INCR),
    ("exceptionally", BOOST_INCR),
    ("remarkably", BOOST_INCR),
    ("significantly", BOOST_INCR),
    ("substantially", BOOST_INCR),
    ("sharply", BOOST_INCR),
    ("strongly", BOOST_INCR),
    ("deeply", BOOST_INCR),
    ("absolutely", BOOST_INCR),
    ("completely", BOOST_INCR),
    ("considerably", BOOST_INCR),
    ("decidedly", BOOST_INCR),
    ("greatly", BOOST_INCR),
    ("highly", BOOST_INCR),
    ("intensely", BOOST_INCR),
    ("particularly", BOOST_INCR),
    ("totally", BOOST_INCR),
    ("tremendously", BOOST_INCR),
    ("unbelievably", BOOST_INCR),
    ("utterly", BOOST_INCR),
    ("so", BOOST_INCR),
    ("slightly", BOOST_DECR),
    ("somewhat", BOOST_DECR),
    ("marginally", BOOST_DECR),
    ("barely", BOOST_DECR),
    ("hardly", BOOST_DECR),
    ("scarcely", BOOST_DECR),
    ("mildly", BOOST_DECR),
    ("moderately", BOOST_DECR),
    ("partly", BOOST_DECR),
    ("occasionally", BOOST_DECR),
    ("little", BOOST_DECR),
];

static NEGATION_WORDS: &[&str] = &[
    "not",
    "no",
    "never",
    "none",
    "neither",
    "nor",
    "cannot",
    "cant",
    "can't",
    "wont",
    "won't",
    "dont",
    "don't",
    "doesnt",
    "doesn't",
    "didnt",
    "didn't",
    "isnt",
    "isn't",
    "wasnt",
    "wasn't",
    "arent",
    "aren't",
    "werent",
    "weren't",
    "hasnt",
    "hasn't",
    "havent",
    "haven't",
    "wouldnt",
    "wouldn't",
    "couldnt",
    "couldn't",
    "shouldnt",
    "shouldn't",
    "aint",
    "ain't",
    "without",
    "rarely",
    "seldom",
];

lazy_static! {
    /// Word -> valence on the [-4, 4] scale.
    pub static ref LEXICON: HashMap<&'static str, f64> =
        WORD_VALENCES.iter().copied().collect();

    /// Degree adverb -> signed intensity shift.
    pub static ref BOOSTERS: HashMap<&'static str, f64> =
        BOOSTER_VALUES.iter().copied().collect();

    pub static ref NEGATIONS: HashSet<&'static str> =
        NEGATION_WORDS.iter().copied().collect();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valences_stay_on_scale() {
        for (word, valence) in WORD_VALENCES {
            assert!(
                (-4.0..=4.0).contains(valence),
                "{} is off the scale: {}",
                word,
                valence
            );
            assert!(*valence != 0.0, "{} carries no signal", word);
        }
    }

    #[test]
    fn test_no_duplicate_entries() {
        assert_eq!(LEXICON.len(), WORD_VALENCES.len());
        assert_eq!(BOOSTERS.len(), BOOSTER_VALUES.len());
        assert_eq!(NEGATIONS.len(), NEGATION_WORDS.len());
    }

    #[test]
    fn test_boosters_are_symmetric_shifts() {
        for (_, shift) in BOOSTER_VALUES {
            assert!(*shift == BOOST_INCR || *shift == BOOST_DECR);
        }
    }

    #[test]
    fn test_negations_cover_contractions() {
        assert!(NEGATIONS.contains("not"));
        assert!(NEGATIONS.contains("don't"));
        assert!(NEGATIONS.contains("dont"));
    }

    #[test]
    fn test_booster_words_are_not_sentiment_words() {
        for (word, _) in BOOSTER_VALUES {
            assert!(!LEXICON.contains_key(word), "{} is in both tables", word);
        }
    }
}
