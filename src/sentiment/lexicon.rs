//! Lexicon-based polarity scorer.
//!
//! Every lexicon word found in the text contributes its score. An intensifier
//! within the window before it scales the score, a negation within the window
//! flips and halves it, and the polarity is the mean of all contributions.

use rustc_hash::FxHashMap;
use std::sync::LazyLock;

use super::PolarityScorer;
use crate::tokenizer::tokenize;

const DEFAULT_WINDOW: usize = 3;
const NEGATION_FACTOR: f64 = -0.5;

const POLARITY: &[(&str, f64)] = &[
    // favorable
    ("able", 0.5),
    ("accessible", 0.3),
    ("acclaimed", 0.6),
    ("accomplished", 0.5),
    ("accurate", 0.4),
    ("achievement", 0.5),
    ("active", 0.13),
    ("admirable", 0.7),
    ("adorable", 0.5),
    ("advanced", 0.4),
    ("affordable", 0.4),
    ("agree", 0.2),
    ("agreeable", 0.5),
    ("agreement", 0.3),
    ("amazed", 0.6),
    ("amazing", 0.6),
    ("ambitious", 0.3),
    ("appealing", 0.5),
    ("appreciate", 0.5),
    ("appreciated", 0.5),
    ("approve", 0.3),
    ("approved", 0.3),
    ("attractive", 0.6),
    ("authentic", 0.5),
    ("awesome", 1.0),
    ("balanced", 0.3),
    ("bargain", 0.4),
    ("beautiful", 0.85),
    ("beloved", 0.7),
    ("beneficial", 0.5),
    ("benefit", 0.5),
    ("benefits", 0.5),
    ("best", 1.0),
    ("better", 0.5),
    ("blessed", 0.6),
    ("bold", 0.3),
    ("boom", 0.4),
    ("booming", 0.5),
    ("boost", 0.4),
    ("bountiful", 0.5),
    ("brave", 0.7),
    ("breakthrough", 0.6),
    ("breathtaking", 0.8),
    ("bright", 0.7),
    ("brightest", 0.7),
    ("brilliant", 0.9),
    ("calm", 0.3),
    ("calming", 0.4),
    ("capable", 0.4),
    ("careful", 0.3),
    ("celebrate", 0.6),
    ("celebrated", 0.5),
    ("champion", 0.6),
    ("charming", 0.5),
    ("cheerful", 0.7),
    ("clean", 0.37),
    ("clever", 0.5),
    ("comfort", 0.4),
    ("comfortable", 0.4),
    ("compassionate", 0.6),
    ("competent", 0.4),
    ("competitive", 0.3),
    ("confident", 0.5),
    ("convenient", 0.4),
    ("cool", 0.35),
    ("cooperative", 0.3),
    ("courageous", 0.6),
    ("creative", 0.5),
    ("cute", 0.5),
    ("decent", 0.17),
    ("dedicated", 0.4),
    ("delight", 0.8),
    ("delighted", 0.7),
    ("dependable", 0.5),
    ("deserving", 0.5),
    ("dynamic", 0.3),
    ("eager", 0.3),
    ("ease", 0.3),
    ("easier", 0.4),
    ("easy", 0.43),
    ("effective", 0.6),
    ("efficient", 0.5),
    ("elegant", 0.6),
    ("encouraging", 0.5),
    ("energetic", 0.5),
    ("engaging", 0.5),
    ("enhanced", 0.3),
    ("enjoy", 0.5),
    ("enjoyable", 0.5),
    ("enjoyed", 0.5),
    ("enthusiastic", 0.6),
    ("essential", 0.3),
    ("ethical", 0.4),
    ("excel", 0.6),
    ("excellence", 0.8),
    ("excellent", 1.0),
    ("exceptional", 0.7),
    ("excited", 0.4),
    ("exciting", 0.3),
    ("exquisite", 0.8),
    ("extraordinary", 0.5),
    ("fabulous", 0.4),
    ("fair", 0.7),
    ("faithful", 0.5),
    ("famous", 0.5),
    ("fantastic", 0.4),
    ("fascinating", 0.6),
    ("favorable", 0.6),
    ("favorite", 0.5),
    ("favourite", 0.5),
    ("fearless", 0.5),
    ("festive", 0.5),
    ("fine", 0.42),
    ("flawless", 0.8),
    ("flourishing", 0.6),
    ("fond", 0.4),
    ("fortunate", 0.6),
    ("fortune", 0.4),
    ("free", 0.4),
    ("freedom", 0.4),
    ("fresh", 0.3),
    ("friendly", 0.38),
    ("friendship", 0.5),
    ("fun", 0.3),
    ("gain", 0.3),
    ("gains", 0.3),
    ("generous", 0.5),
    ("genius", 0.6),
    ("gentle", 0.5),
    ("genuine", 0.4),
    ("gifted", 0.6),
    ("glad", 0.5),
    ("glorious", 0.7),
    ("good", 0.7),
    ("gorgeous", 0.7),
    ("graceful", 0.6),
    ("gracious", 0.6),
    ("grateful", 0.6),
    ("great", 0.8),
    ("greatest", 1.0),
    ("grow", 0.3),
    ("growth", 0.3),
    ("handsome", 0.5),
    ("happy", 0.8),
    ("harmony", 0.5),
    ("heal", 0.3),
    ("healing", 0.3),
    ("healthier", 0.5),
    ("healthy", 0.5),
    ("helped", 0.3),
    ("helpful", 0.5),
    ("heroic", 0.6),
    ("highlight", 0.3),
    ("historic", 0.2),
    ("honest", 0.6),
    ("honor", 0.5),
    ("honored", 0.5),
    ("hope", 0.4),
    ("hopeful", 0.5),
    ("humble", 0.3),
    ("ideal", 0.9),
    ("important", 0.4),
    ("impressed", 0.6),
    ("impressive", 1.0),
    ("improve", 0.4),
    ("improved", 0.4),
    ("improvement", 0.4),
    ("improving", 0.4),
    ("incredible", 0.9),
    ("innovation", 0.4),
    ("innovative", 0.5),
    ("inspired", 0.5),
    ("inspiring", 0.6),
    ("intelligent", 0.6),
    ("interesting", 0.5),
    ("joy", 0.7),
    ("joyful", 0.8),
    ("justice", 0.3),
    ("keen", 0.3),
    ("kind", 0.6),
    ("kindness", 0.6),
    ("landmark", 0.3),
    ("laughter", 0.5),
    ("leading", 0.3),
    ("legendary", 0.6),
    ("liberty", 0.3),
    ("lively", 0.5),
    ("love", 0.5),
    ("loved", 0.7),
    ("lovely", 0.5),
    ("loyal", 0.5),
    ("lucky", 0.5),
    ("luxury", 0.5),
    ("magnificent", 1.0),
    ("marvelous", 0.8),
    ("masterpiece", 0.8),
    ("meaningful", 0.5),
    ("memorable", 0.5),
    ("merry", 0.6),
    ("modern", 0.2),
    ("motivated", 0.4),
    ("neat", 0.4),
    ("nice", 0.6),
    ("noble", 0.5),
    ("notable", 0.3),
    ("opportunities", 0.4),
    ("opportunity", 0.4),
    ("optimal", 0.5),
    ("optimistic", 0.5),
    ("outstanding", 0.5),
    ("paradise", 0.7),
    ("passionate", 0.5),
    ("peace", 0.5),
    ("peaceful", 0.5),
    ("perfect", 1.0),
    ("pleasant", 0.73),
    ("pleased", 0.5),
    ("pleasure", 0.6),
    ("plentiful", 0.4),
    ("popular", 0.6),
    ("positive", 0.23),
    ("powerful", 0.3),
    ("praise", 0.6),
    ("praised", 0.6),
    ("precious", 0.6),
    ("premium", 0.4),
    ("pretty", 0.25),
    ("productive", 0.4),
    ("profit", 0.4),
    ("progress", 0.4),
    ("promising", 0.5),
    ("prosper", 0.6),
    ("prosperity", 0.6),
    ("prosperous", 0.6),
    ("protect", 0.3),
    ("protected", 0.3),
    ("proud", 0.8),
    ("pure", 0.4),
    ("quality", 0.3),
    ("rally", 0.3),
    ("rebound", 0.3),
    ("recommended", 0.5),
    ("recover", 0.3),
    ("recovered", 0.3),
    ("recovery", 0.3),
    ("refreshing", 0.5),
    ("reliable", 0.5),
    ("relief", 0.4),
    ("relieved", 0.4),
    ("remarkable", 0.75),
    ("renewed", 0.3),
    ("resilient", 0.5),
    ("respect", 0.4),
    ("respected", 0.5),
    ("restored", 0.3),
    ("reward", 0.5),
    ("rewarding", 0.6),
    ("rich", 0.4),
    ("robust", 0.4),
    ("romantic", 0.5),
    ("safe", 0.5),
    ("safely", 0.4),
    ("satisfied", 0.5),
    ("satisfying", 0.5),
    ("saved", 0.3),
    ("savings", 0.3),
    ("secure", 0.4),
    ("sensational", 0.6),
    ("sensible", 0.4),
    ("shine", 0.4),
    ("sincere", 0.5),
    ("skilled", 0.5),
    ("skillful", 0.5),
    ("smart", 0.21),
    ("smile", 0.5),
    ("smooth", 0.4),
    ("solid", 0.3),
    ("special", 0.36),
    ("spectacular", 0.8),
    ("splendid", 0.8),
    ("stable", 0.3),
    ("stellar", 0.8),
    ("strong", 0.43),
    ("stunning", 0.7),
    ("stylish", 0.5),
    ("succeed", 0.6),
    ("success", 0.6),
    ("successes", 0.6),
    ("successful", 0.75),
    ("suitable", 0.4),
    ("sunny", 0.5),
    ("superb", 1.0),
    ("superior", 0.6),
    ("support", 0.3),
    ("supported", 0.3),
    ("supportive", 0.5),
    ("surge", 0.3),
    ("sustainable", 0.3),
    ("sweet", 0.35),
    ("talented", 0.6),
    ("terrific", 1.0),
    ("thankful", 0.5),
    ("thanks", 0.4),
    ("thoughtful", 0.4),
    ("thrilled", 0.6),
    ("thrive", 0.6),
    ("thriving", 0.6),
    ("top", 0.5),
    ("tremendous", 0.5),
    ("triumph", 0.7),
    ("trust", 0.4),
    ("trusted", 0.5),
    ("trustworthy", 0.6),
    ("unique", 0.4),
    ("united", 0.3),
    ("upbeat", 0.5),
    ("upgrade", 0.3),
    ("useful", 0.3),
    ("valuable", 0.5),
    ("vibrant", 0.6),
    ("victory", 0.7),
    ("vital", 0.3),
    ("warm", 0.6),
    ("wealthy", 0.4),
    ("welcome", 0.6),
    ("win", 0.8),
    ("winning", 0.5),
    ("wins", 0.7),
    ("wise", 0.6),
    ("witty", 0.5),
    ("wonder", 0.3),
    ("wonderful", 1.0),
    ("worthy", 0.5),
    ("wow", 0.6),
    // unfavorable
    ("abandoned", -0.4),
    ("abuse", -0.7),
    ("abusive", -0.7),
    ("abysmal", -1.0),
    ("accident", -0.4),
    ("accused", -0.4),
    ("afraid", -0.6),
    ("aggressive", -0.4),
    ("alarming", -0.5),
    ("anger", -0.5),
    ("angered", -0.5),
    ("angry", -0.5),
    ("annoying", -0.8),
    ("anxious", -0.4),
    ("appalling", -0.9),
    ("arrogant", -0.6),
    ("ashamed", -0.6),
    ("assault", -0.6),
    ("attack", -0.4),
    ("awful", -1.0),
    ("awkward", -0.3),
    ("backlash", -0.4),
    ("bad", -0.7),
    ("bankrupt", -0.6),
    ("banned", -0.3),
    ("bitter", -0.5),
    ("blame", -0.4),
    ("bleak", -0.5),
    ("boring", -1.0),
    ("broken", -0.4),
    ("brutal", -0.8),
    ("bullying", -0.6),
    ("burden", -0.4),
    ("catastrophe", -0.8),
    ("catastrophic", -0.9),
    ("chaos", -0.6),
    ("chaotic", -0.6),
    ("cheat", -0.6),
    ("clumsy", -0.4),
    ("collapse", -0.6),
    ("complain", -0.3),
    ("complaint", -0.3),
    ("concern", -0.2),
    ("concerned", -0.2),
    ("concerns", -0.2),
    ("conflict", -0.4),
    ("confused", -0.4),
    ("confusing", -0.4),
    ("controversial", -0.3),
    ("corrupt", -0.7),
    ("costly", -0.3),
    ("crash", -0.6),
    ("crime", -0.5),
    ("criminal", -0.5),
    ("crisis", -0.6),
    ("criticism", -0.4),
    ("criticized", -0.4),
    ("crude", -0.3),
    ("cruel", -1.0),
    ("crushed", -0.5),
    ("cuts", -0.2),
    ("damage", -0.5),
    ("damaged", -0.5),
    ("danger", -0.6),
    ("dangerous", -0.6),
    ("dead", -0.2),
    ("deadly", -0.7),
    ("death", -0.5),
    ("debt", -0.3),
    ("deceptive", -0.6),
    ("decline", -0.4),
    ("defeat", -0.5),
    ("defeated", -0.5),
    ("deficit", -0.3),
    ("delay", -0.3),
    ("delayed", -0.3),
    ("denied", -0.3),
    ("depressed", -0.6),
    ("depressing", -0.6),
    ("desperate", -0.6),
    ("destroy", -0.6),
    ("destroyed", -0.6),
    ("destruction", -0.6),
    ("devastated", -0.8),
    ("devastating", -0.8),
    ("difficult", -0.5),
    ("dire", -0.6),
    ("dirty", -0.6),
    ("disappointed", -0.6),
    ("disappointing", -0.6),
    ("disappointment", -0.6),
    ("disaster", -0.8),
    ("disastrous", -0.9),
    ("disgusting", -1.0),
    ("dismal", -0.6),
    ("disrupt", -0.3),
    ("disruption", -0.3),
    ("distress", -0.5),
    ("disturbing", -0.6),
    ("doubt", -0.3),
    ("downturn", -0.4),
    ("dreadful", -1.0),
    ("drop", -0.2),
    ("dropped", -0.2),
    ("dull", -0.3),
    ("dumb", -0.5),
    ("embarrassing", -0.5),
    ("emergency", -0.4),
    ("evil", -1.0),
    ("exhausted", -0.4),
    ("expensive", -0.5),
    ("fail", -0.5),
    ("failed", -0.5),
    ("failure", -0.32),
    ("fake", -0.5),
    ("falling", -0.2),
    ("fatal", -0.7),
    ("fault", -0.4),
    ("fear", -0.6),
    ("fearful", -0.6),
    ("feeble", -0.5),
    ("fight", -0.3),
    ("fired", -0.3),
    ("flaw", -0.4),
    ("flawed", -0.4),
    ("flood", -0.3),
    ("foolish", -0.6),
    ("fragile", -0.3),
    ("fraud", -0.8),
    ("frightening", -0.6),
    ("frustrated", -0.5),
    ("frustrating", -0.5),
    ("furious", -0.8),
    ("gloomy", -0.5),
    ("grave", -0.4),
    ("greedy", -0.6),
    ("grief", -0.6),
    ("grim", -0.6),
    ("guilty", -0.5),
    ("hard", -0.3),
    ("harm", -0.6),
    ("harmful", -0.6),
    ("harsh", -0.5),
    ("hate", -0.8),
    ("hazardous", -0.5),
    ("helpless", -0.5),
    ("hopeless", -0.7),
    ("horrible", -1.0),
    ("hostile", -0.6),
    ("hurt", -0.5),
    ("hurtful", -0.6),
    ("idiot", -0.8),
    ("ignorant", -0.5),
    ("ill", -0.5),
    ("illegal", -0.5),
    ("illness", -0.5),
    ("inadequate", -0.5),
    ("incompetent", -0.7),
    ("inferior", -0.5),
    ("injured", -0.5),
    ("injury", -0.5),
    ("insane", -0.5),
    ("insult", -0.6),
    ("jealous", -0.5),
    ("kill", -0.6),
    ("killed", -0.6),
    ("lame", -0.5),
    ("lazy", -0.4),
    ("lie", -0.4),
    ("lies", -0.4),
    ("lonely", -0.5),
    ("lose", -0.4),
    ("losing", -0.4),
    ("loss", -0.5),
    ("losses", -0.5),
    ("lost", -0.3),
    ("mediocre", -0.4),
    ("messy", -0.4),
    ("miserable", -1.0),
    ("mistake", -0.4),
    ("mistakes", -0.4),
    ("murder", -0.8),
    ("nasty", -0.8),
    ("negative", -0.3),
    ("nightmare", -0.8),
    ("noisy", -0.3),
    ("offensive", -0.6),
    ("outrage", -0.6),
    ("outrageous", -0.6),
    ("overpriced", -0.5),
    ("painful", -0.7),
    ("panic", -0.6),
    ("pathetic", -1.0),
    ("penalty", -0.3),
    ("pessimistic", -0.5),
    ("plunge", -0.5),
    ("pointless", -0.5),
    ("pollution", -0.4),
    ("poor", -0.4),
    ("poverty", -0.5),
    ("problem", -0.3),
    ("protest", -0.2),
    ("punish", -0.4),
    ("recession", -0.5),
    ("reckless", -0.6),
    ("regret", -0.5),
    ("rejected", -0.4),
    ("risk", -0.3),
    ("risky", -0.5),
    ("rude", -0.7),
    ("ruin", -0.6),
    ("ruined", -0.6),
    ("sad", -0.5),
    ("scam", -0.7),
    ("scandal", -0.7),
    ("scary", -0.5),
    ("serious", -0.33),
    ("severe", -0.5),
    ("shame", -0.6),
    ("shameful", -0.7),
    ("shock", -0.4),
    ("shocking", -0.6),
    ("shortage", -0.4),
    ("shortages", -0.4),
    ("sick", -0.71),
    ("sickening", -0.8),
    ("slow", -0.3),
    ("slump", -0.5),
    ("sorry", -0.5),
    ("stress", -0.4),
    ("stressful", -0.5),
    ("struggle", -0.4),
    ("struggling", -0.4),
    ("stupid", -0.8),
    ("suffer", -0.5),
    ("suffering", -0.5),
    ("suspicious", -0.4),
    ("tense", -0.3),
    ("tension", -0.3),
    ("terrible", -1.0),
    ("threat", -0.5),
    ("tired", -0.4),
    ("toxic", -0.6),
    ("tragedy", -0.7),
    ("tragic", -0.75),
    ("trouble", -0.4),
    ("troubled", -0.4),
    ("ugly", -0.7),
    ("unacceptable", -0.6),
    ("uncertain", -0.3),
    ("uncertainty", -0.3),
    ("unclear", -0.2),
    ("unemployment", -0.4),
    ("unfair", -0.5),
    ("unfortunate", -0.5),
    ("unhappy", -0.6),
    ("unpleasant", -0.6),
    ("unpopular", -0.4),
    ("unsafe", -0.5),
    ("unstable", -0.4),
    ("upset", -0.5),
    ("useless", -0.5),
    ("victim", -0.5),
    ("victims", -0.5),
    ("violence", -0.7),
    ("violent", -0.8),
    ("vulnerable", -0.3),
    ("war", -0.5),
    ("warning", -0.3),
    ("waste", -0.4),
    ("wasted", -0.4),
    ("weak", -0.38),
    ("weakness", -0.4),
    ("woeful", -0.7),
    ("worried", -0.5),
    ("worry", -0.4),
    ("worse", -0.4),
    ("worst", -1.0),
    ("wounded", -0.5),
    ("wreck", -0.6),
    ("wrong", -0.5),
];

const INTENSIFIERS: &[(&str, f64)] = &[
    ("absolutely", 1.3),
    ("barely", 0.5),
    ("deeply", 1.3),
    ("especially", 1.2),
    ("exceptionally", 1.5),
    ("extremely", 1.5),
    ("fairly", 0.8),
    ("highly", 1.3),
    ("incredibly", 1.4),
    ("quite", 1.1),
    ("rather", 0.9),
    ("really", 1.2),
    ("remarkably", 1.3),
    ("slightly", 0.6),
    ("so", 1.3),
    ("somewhat", 0.7),
    ("totally", 1.3),
    ("truly", 1.3),
    ("very", 1.3),
];

const NEGATIONS: &[&str] = &[
    "hardly", "neither", "never", "no", "nobody", "none", "nor", "not", "nothing", "nowhere",
    "without",
];

static POLARITY_TABLE: LazyLock<FxHashMap<&'static str, f64>> =
    LazyLock::new(|| POLARITY.iter().copied().collect());

static INTENSIFIER_TABLE: LazyLock<FxHashMap<&'static str, f64>> =
    LazyLock::new(|| INTENSIFIERS.iter().copied().collect());

/// Deterministic polarity scorer backed by an embedded English lexicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexiconScorer {
    window: usize,
}

impl Default for LexiconScorer {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW)
    }
}

impl LexiconScorer {
    /// Creates a scorer whose negations and intensifiers reach `window` words ahead.
    pub fn new(window: usize) -> Self {
        Self {
            window: window.max(1),
        }
    }

    fn within(&self, marker: Option<usize>, idx: usize) -> bool {
        marker.is_some_and(|at| idx - at <= self.window)
    }
}

impl PolarityScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> f64 {
        let lowered = text.to_lowercase();
        let mut total = 0.0;
        let mut scored = 0usize;
        let mut negated_at = None;
        let mut intensified_at = None;
        let mut factor = 1.0;

        for (idx, word) in tokenize(&lowered).into_iter().enumerate() {
            if is_negation(word) {
                negated_at = Some(idx);
                continue;
            }
            if let Some(&multiplier) = INTENSIFIER_TABLE.get(word) {
                intensified_at = Some(idx);
                factor = multiplier;
                continue;
            }
            let Some(&base) = POLARITY_TABLE.get(word) else {
                continue;
            };

            let mut score = base;
            if self.within(intensified_at, idx) {
                score *= factor;
            }
            if self.within(negated_at, idx) {
                score *= NEGATION_FACTOR;
            }
            total += score.clamp(-1.0, 1.0);
            scored += 1;
            negated_at = None;
            intensified_at = None;
        }

        if scored == 0 {
            0.0
        } else {
            (total / scored as f64).clamp(-1.0, 1.0)
        }
    }
}

fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(&word) || word.ends_with("n't") || word.ends_with("n’t")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn polarity(text: &str) -> f64 {
        LexiconScorer::default().polarity(text)
    }

    #[test]
    fn positive_language_scores_above_zero() {
        assert!(polarity("What a wonderful, beautiful and inspiring day. Truly excellent work!") > 0.0);
    }

    #[test]
    fn negative_language_scores_below_zero() {
        assert!(polarity("The launch was a terrible, painful disaster.") < 0.0);
    }

    #[test]
    fn text_without_lexicon_words_is_neutral() {
        assert_eq!(polarity("The committee meets on Tuesday at noon."), 0.0);
        assert_eq!(polarity(""), 0.0);
    }

    #[test]
    fn negation_flips_and_dampens() {
        let plain = polarity("the food was good");
        let negated = polarity("the food was not good");
        assert!((plain - 0.7).abs() < 1e-9);
        assert!((negated + 0.35).abs() < 1e-9);
        assert!(polarity("it isn't bad") > 0.0);
    }

    #[test]
    fn negation_only_reaches_the_window() {
        let far = polarity("not one of the many reasons this is good");
        assert!((far - 0.7).abs() < 1e-9);
    }

    #[test]
    fn intensifiers_scale_and_clamp() {
        let very = polarity("a very good result");
        assert!((very - 0.91).abs() < 1e-9);
        assert_eq!(polarity("an extremely perfect result"), 1.0);
    }

    #[test]
    fn lexicon_words_are_unique() {
        assert_eq!(POLARITY_TABLE.len(), POLARITY.len());
        assert!(POLARITY.len() > 500);
        assert!(POLARITY.iter().all(|(_, score)| (-1.0..=1.0).contains(score)));
    }

    #[test]
    fn everyday_news_sentences_are_not_neutral() {
        let positive = [
            "The festival drew a vibrant, generous crowd.",
            "Investors welcomed the robust quarterly gains.",
            "Volunteers praised the peaceful handover.",
        ];
        let negative = [
            "The storm left a devastating trail of destruction.",
            "Shoppers face shortages and rising debt.",
            "Critics called the delayed project a costly mistake.",
        ];
        for text in positive {
            assert!(polarity(text) > 0.0, "{text}");
        }
        for text in negative {
            assert!(polarity(text) < 0.0, "{text}");
        }
    }

    #[test]
    fn contractions_negate_through_split_clitics() {
        assert!(polarity("the results weren’t encouraging") < 0.0);
    }

    #[test]
    fn polarity_is_the_mean_of_contributions() {
        let mixed = polarity("good food, bad service");
        assert!(mixed.abs() < 1e-9);
    }
}
