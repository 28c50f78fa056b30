//! 固定語彙テーブル
//!
//! - BLOCKED_TERMS: 著作権・商標に該当する語（部分一致で除外）
//! - TAXONOMY: ニッチカテゴリとキーワード（宣言順がタイブレークの順序）
//!
//! どちらも起動時に確定する読み取り専用データ。実行時に変更しない。

/// カテゴリに一致しなかった行のニッチ名
pub const GENERAL: &str = "general";

/// 季節カテゴリ名（推奨生成で参照）
pub const SEASONAL: &str = "seasonal";

/// 除外対象の語（小文字）
pub const BLOCKED_TERMS: &[&str] = &[
    // Disney / Marvel / DC
    "disney", "mickey", "minnie", "donald", "goofy", "elsa", "frozen", "marvel",
    "avengers", "spiderman", "spider-man", "batman", "superman", "hulk", "thor",
    "iron man", "captain america", "black widow", "deadpool", "wolverine",
    // TV / 映画
    "netflix", "friends", "breaking bad", "game of thrones", "stranger things",
    "harry potter", "hogwarts", "dumbledore", "hermione", "star wars",
    "darth vader", "luke skywalker", "princess leia", "yoda", "jedi",
    // ブランド
    "nike", "adidas", "coca cola", "pepsi", "mcdonalds", "burger king",
    "apple", "samsung", "google", "microsoft", "amazon", "facebook",
    "instagram", "twitter", "tiktok", "youtube", "spotify",
    // 音楽・アーティスト
    "taylor swift", "beyonce", "kanye west", "eminem", "drake", "rihanna",
    "lady gaga", "justin bieber", "ariana grande", "ed sheeran",
    // スポーツチーム
    "lakers", "warriors", "celtics", "bulls", "heat", "spurs", "knicks",
    "yankees", "red sox", "dodgers", "giants", "patriots", "cowboys",
    "packers", "steelers", "eagles", "chiefs", "ravens", "broncos",
    // ゲーム
    "pokemon", "pikachu", "nintendo", "mario", "luigi", "zelda", "sonic",
    "minecraft", "fortnite", "call of duty", "grand theft auto", "fifa",
    // 汎用の権利表記
    "tm", "®", "©", "trademark", "copyright", "licensed", "official",
];

/// ニッチカテゴリ
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

/// ニッチ分類表（順序固定）
pub const TAXONOMY: &[Category] = &[
    Category {
        name: "seasonal",
        keywords: &[
            "christmas", "halloween", "thanksgiving", "easter", "valentine",
            "summer", "winter", "spring", "fall", "holiday", "season",
        ],
    },
    Category {
        name: "motivational",
        keywords: &[
            "motivation", "inspire", "success", "hustle", "grind",
            "dream", "achieve", "goals", "mindset", "positive",
        ],
    },
    Category {
        name: "hobbies",
        keywords: &[
            "fishing", "hunting", "camping", "hiking", "gardening",
            "cooking", "reading", "travel", "photography", "art",
        ],
    },
    Category {
        name: "professions",
        keywords: &[
            "teacher", "nurse", "doctor", "engineer", "lawyer",
            "firefighter", "police", "chef", "mechanic", "programmer",
        ],
    },
    Category {
        name: "family",
        keywords: &[
            "mom", "dad", "grandma", "grandpa", "sister", "brother",
            "family", "mother", "father", "parent", "child",
        ],
    },
    Category {
        name: "humor",
        keywords: &[
            "funny", "sarcastic", "witty", "humor", "joke", "laugh",
            "comedy", "hilarious", "amusing", "clever",
        ],
    },
    Category {
        name: "lifestyle",
        keywords: &[
            "vintage", "retro", "minimalist", "boho", "hipster",
            "aesthetic", "trendy", "stylish", "cool", "awesome",
        ],
    },
    Category {
        name: "animals",
        keywords: &[
            "cat", "dog", "horse", "bird", "fish", "pet", "animal",
            "wildlife", "nature", "rescue",
        ],
    },
    Category {
        name: "food",
        keywords: &[
            "pizza", "coffee", "wine", "beer", "chocolate", "food",
            "cooking", "baking", "restaurant", "chef",
        ],
    },
    Category {
        name: "sports",
        keywords: &[
            "football", "basketball", "baseball", "soccer", "tennis",
            "golf", "volleyball", "hockey", "running", "fitness",
        ],
    },
];

/// カテゴリ名が分類表（または general）に含まれるか
pub fn is_known_category(name: &str) -> bool {
    name == GENERAL || TAXONOMY.iter().any(|c| c.name == name)
}
