// src/classify.rs
//! Keyword classifier.
//!
//! A name is lower-cased and tested against each [`RuleGroup`] in declaration
//! order; the first group with a keyword occurring in the name decides the
//! category. There is no scoring: overlapping names go to the earlier group,
//! and that precedence is part of the contract. Names matching nothing are
//! [`Category::Other`].

use crate::model::Category;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RuleGroup<'a> {
    pub category: Category,
    pub keywords: &'a [&'a str],
}

/// Ordered rule table. Keywords are matched as-is against the lower-cased
/// name, so latin keywords must be written in lower case.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CategoryRules<'a> {
    groups: &'a [RuleGroup<'a>],
}

impl<'a> CategoryRules<'a> {
    pub const fn new(groups: &'a [RuleGroup<'a>]) -> Self {
        Self { groups }
    }

    pub fn groups(&self) -> &'a [RuleGroup<'a>] {
        self.groups
    }

    pub fn classify(&self, name: &str) -> Category {
        let name = name.to_lowercase();
        self.groups
            .iter()
            .find(|g| g.keywords.iter().any(|kw| name.contains(kw)))
            .map_or(Category::Other, |g| g.category)
    }
}

static DEFAULT_GROUPS: [RuleGroup<'static>; 8] = [
    RuleGroup {
        category: Category::Coffee,
        keywords: &[
            "コーヒー", "カフェ", "ボス", "ワンダ", "fire", "ブラック",
            "ラテ", "微糖", "ブレンド", "ショット", "デミタス", "アロマ",
        ],
    },
    RuleGroup {
        category: Category::Tea,
        keywords: &["茶", "tea", "紅茶", "麦茶", "緑茶", "伊右衛門", "生茶", "颯"],
    },
    RuleGroup {
        category: Category::Carbonated,
        keywords: &[
            "サイダー", "ソーダ", "スカッシュ", "タンサン", "coke",
            "ペプシ", "ファンタ", "メッツ", "デカビタ",
        ],
    },
    RuleGroup {
        category: Category::Juice,
        keywords: &[
            "果実", "オレンジ", "りんご", "ピーチ", "グレープ", "レモン", "ベリー",
            "パイン", "なっちゃん", "トロピカーナ", "welch", "ピングレ", "うめ",
        ],
    },
    RuleGroup {
        category: Category::Functional,
        keywords: &[
            "スポーツ", "ポカリ", "アミノ", "dカラ", "サプリ", "plus",
            "免疫", "睡眠", "腸活", "ラブズ", "イミューズ", "カロリミット",
        ],
    },
    RuleGroup {
        category: Category::Energy,
        keywords: &["モンスター", "レッドブル", "zone", "エナジー", "ドデカミン"],
    },
    RuleGroup {
        category: Category::Water,
        keywords: &["水", "ウォーター", "天然水"],
    },
    RuleGroup {
        category: Category::Dairy,
        keywords: &["オレ", "ミルク", "ヨーグルト"],
    },
];

pub static DEFAULT_RULES: CategoryRules<'static> = CategoryRules::new(&DEFAULT_GROUPS);

/// Classify with the built-in table.
pub fn classify(name: &str) -> Category {
    DEFAULT_RULES.classify(name)
}
