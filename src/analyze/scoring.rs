use crate::types::language::Language;
use crate::types::metrics::{
    MetricVector, API_CALLS, ASYNC_CODE, CLASSES, COMMENT_LINES, DATABASES, FRAMEWORKS,
    FUNCTIONS, IMPORTS, SELECTORS, TAGS, TRY_BLOCKS,
};

pub const BASE_SCORE: u32 = 20;
pub const MAX_SCORE: u32 = 100;

/// `(metric, minimum, bonus)`: the bonus applies when the metric reaches the minimum.
type Bonus = (&'static str, u64, u32);

const PYTHON_BONUSES: [Bonus; 8] = [
    (FUNCTIONS, 5, 10),
    (CLASSES, 2, 10),
    (IMPORTS, 5, 10),
    (FRAMEWORKS, 1, 10),
    (DATABASES, 1, 10),
    (API_CALLS, 3, 5),
    (ASYNC_CODE, 2, 5),
    (TRY_BLOCKS, 2, 10),
];

const SCRIPT_BONUSES: [Bonus; 5] = [
    (IMPORTS, 5, 10),
    (CLASSES, 1, 5),
    (FRAMEWORKS, 1, 10),
    (API_CALLS, 2, 10),
    (TRY_BLOCKS, 1, 5),
];

const DART_BONUSES: [Bonus; 5] = [
    (IMPORTS, 5, 10),
    (CLASSES, 2, 10),
    (FRAMEWORKS, 2, 10),
    (ASYNC_CODE, 2, 5),
    (TRY_BLOCKS, 1, 5),
];

const MARKUP_BONUSES: [Bonus; 2] = [(TAGS, 80, 10), (SELECTORS, 50, 10)];

/// Depth score in `[0, 100]`; a pure function of its inputs.
pub fn depth_score(
    language: Language,
    metrics: &MetricVector,
    readme_quality: u8,
    test_files: usize,
) -> u8 {
    let lines = metrics.lines();
    let mut score = BASE_SCORE;

    for threshold in [150, 600, 1500] {
        if lines > threshold {
            score += 10;
        }
    }
    if readme_quality >= 10 {
        score += 5;
    }
    if readme_quality >= 15 {
        score += 5;
    }
    if test_files >= 1 {
        score += 5;
    }
    if test_files >= 5 {
        score += 5;
    }

    score += match language {
        Language::Python => {
            let mut bonus = table_bonus(metrics, &PYTHON_BONUSES);
            if metrics.get(COMMENT_LINES) >= comment_floor(lines, 8, 5) {
                bonus += 10;
            }
            bonus
        }
        Language::JavaScript | Language::TypeScript => {
            let mut bonus = table_bonus(metrics, &SCRIPT_BONUSES);
            if metrics.get(COMMENT_LINES) >= comment_floor(lines, 6, 4) {
                bonus += 5;
            }
            bonus
        }
        Language::Dart => table_bonus(metrics, &DART_BONUSES),
        Language::Html | Language::Css => {
            let mut bonus = table_bonus(metrics, &MARKUP_BONUSES);
            if lines > 200 {
                bonus += 10;
            }
            bonus
        }
        _ => 0,
    };

    score.min(MAX_SCORE) as u8
}

fn table_bonus(metrics: &MetricVector, bonuses: &[Bonus]) -> u32 {
    bonuses
        .iter()
        .filter(|(metric, minimum, _)| metrics.get(metric) >= *minimum)
        .map(|(_, _, bonus)| bonus)
        .sum()
}

/// `max(minimum, floor(lines * percent / 100))`.
fn comment_floor(lines: u64, minimum: u64, percent: u64) -> u64 {
    minimum.max(lines * percent / 100)
}
