//! Fixed content category tables.
//!
//! Categories are a closed, business-maintained vocabulary; tags are managed
//! separately and are not validated here.

/// Categories for articles. Used by `Post.category`.
pub const ARTICLE_CATEGORIES: &[&str] = &[
    "AI",
    "ICT",
    "セミナー",
    "塾",
    "受験",
    "教育",
    "教材",
    "英語",
    "プログラミング",
    "保護者",
    "高校",
    "中学",
    "大学",
    "小学校",
    "教員",
    "地域",
    "学習",
    "オンライン",
    "補助金",
    "お役立ち情報",
    "事務局からのお知らせ",
    "未分類",
];

/// Categories for provider services. Used by `Service.category`.
pub const SERVICE_CATEGORIES: &[&str] = &[
    "AI活用",
    "保護者連絡",
    "生徒管理",
    "生徒集客",
    "英会話",
    "映像授業",
    "問題演習",
    "学習管理システム(LMS)",
    "質問対応",
    "プログラミング",
    "探求・キャリア教育/総合型選抜対策",
    "オンライン授業支援",
    "家庭学習支援",
    "知育/能力開発/幼児教育",
    "講師採用/育成/研修",
    "デバイス・ハードウェア・ICT環境構築",
    "コンサル/フランチャイズ/M&A",
    "助成金・補助金支援",
    "その他管理/代行",
];

pub fn is_valid_article_category(value: &str) -> bool {
    ARTICLE_CATEGORIES.contains(&value)
}

pub fn is_valid_service_category(value: &str) -> bool {
    SERVICE_CATEGORIES.contains(&value)
}

/// Parse a category cell from a bulk TSV import: trimmed, empty and unknown
/// values rejected.
pub fn parse_article_category(value: &str) -> Option<&'static str> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    ARTICLE_CATEGORIES.iter().copied().find(|c| *c == trimmed)
}
