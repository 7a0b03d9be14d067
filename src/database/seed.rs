//! Reference data: the canon, a sample chapter, devotionals, reading plans,
//! Q&A, multimedia, quiz questions and flashcards.
//!
//! Every row has a deterministic id and is inserted with
//! `ON CONFLICT (id) DO NOTHING`, so seeding twice is a no-op.

use sqlx::{PgPool, Postgres, Transaction};
use tracing::info;

use super::manager::DatabaseError;
use super::models::{MediaType, PlanType, Testament};

/// (id, name, abbreviation, chapters) in canonical order
pub const BOOKS: &[(&str, &str, &str, i32)] = &[
    ("gen", "Genesis", "Gen", 50),
    ("exo", "Exodus", "Exod", 40),
    ("lev", "Leviticus", "Lev", 27),
    ("num", "Numbers", "Num", 36),
    ("deu", "Deuteronomy", "Deut", 34),
    ("jos", "Joshua", "Josh", 24),
    ("jdg", "Judges", "Judg", 21),
    ("rut", "Ruth", "Ruth", 4),
    ("1sa", "1 Samuel", "1Sam", 31),
    ("2sa", "2 Samuel", "2Sam", 24),
    ("1ki", "1 Kings", "1Kgs", 22),
    ("2ki", "2 Kings", "2Kgs", 25),
    ("1ch", "1 Chronicles", "1Chr", 29),
    ("2ch", "2 Chronicles", "2Chr", 36),
    ("ezr", "Ezra", "Ezra", 10),
    ("neh", "Nehemiah", "Neh", 13),
    ("est", "Esther", "Esth", 10),
    ("job", "Job", "Job", 42),
    ("psa", "Psalms", "Ps", 150),
    ("pro", "Proverbs", "Prov", 31),
    ("ecc", "Ecclesiastes", "Eccl", 12),
    ("sng", "Song of Songs", "Song", 8),
    ("isa", "Isaiah", "Isa", 66),
    ("jer", "Jeremiah", "Jer", 52),
    ("lam", "Lamentations", "Lam", 5),
    ("ezk", "Ezekiel", "Ezek", 48),
    ("dan", "Daniel", "Dan", 12),
    ("hos", "Hosea", "Hos", 14),
    ("jol", "Joel", "Joel", 3),
    ("amo", "Amos", "Amos", 9),
    ("oba", "Obadiah", "Obad", 1),
    ("jon", "Jonah", "Jonah", 4),
    ("mic", "Micah", "Mic", 7),
    ("nam", "Nahum", "Nah", 3),
    ("hab", "Habakkuk", "Hab", 3),
    ("zep", "Zephaniah", "Zeph", 3),
    ("hag", "Haggai", "Hag", 2),
    ("zec", "Zechariah", "Zech", 14),
    ("mal", "Malachi", "Mal", 4),
    ("mat", "Matthew", "Matt", 28),
    ("mrk", "Mark", "Mark", 16),
    ("luk", "Luke", "Luke", 24),
    ("joh", "John", "John", 21),
    ("act", "Acts", "Acts", 28),
    ("rom", "Romans", "Rom", 16),
    ("1co", "1 Corinthians", "1Cor", 16),
    ("2co", "2 Corinthians", "2Cor", 13),
    ("gal", "Galatians", "Gal", 6),
    ("eph", "Ephesians", "Eph", 6),
    ("php", "Philippians", "Phil", 4),
    ("col", "Colossians", "Col", 4),
    ("1th", "1 Thessalonians", "1Thess", 5),
    ("2th", "2 Thessalonians", "2Thess", 3),
    ("1ti", "1 Timothy", "1Tim", 6),
    ("2ti", "2 Timothy", "2Tim", 4),
    ("tit", "Titus", "Titus", 3),
    ("phm", "Philemon", "Phlm", 1),
    ("heb", "Hebrews", "Heb", 13),
    ("jas", "James", "Jas", 5),
    ("1pe", "1 Peter", "1Pet", 5),
    ("2pe", "2 Peter", "2Pet", 3),
    ("1jn", "1 John", "1John", 5),
    ("2jn", "2 John", "2John", 1),
    ("3jn", "3 John", "3John", 1),
    ("jud", "Jude", "Jude", 1),
    ("rev", "Revelation", "Rev", 22),
];

/// Books before this index belong to the Old Testament
const NEW_TESTAMENT_START: usize = 39;

const PSALM_23_NVI: &[&str] = &[
    "The LORD is my shepherd; I shall not want.",
    "He makes me lie down in green pastures. He leads me beside still waters.",
    "He restores my soul. He leads me in paths of righteousness for his name's sake.",
    "Even though I walk through the valley of the shadow of death, I will fear no evil, for you are with me; your rod and your staff, they comfort me.",
    "You prepare a table before me in the presence of my enemies; you anoint my head with oil; my cup overflows.",
    "Surely goodness and mercy shall follow me all the days of my life, and I shall dwell in the house of the LORD forever.",
];

const PSALM_23_KJV: &[&str] = &[
    "The LORD is my shepherd; I shall not want.",
    "He maketh me to lie down in green pastures: he leadeth me beside the still waters.",
    "He restoreth my soul: he leadeth me in the paths of righteousness for his name's sake.",
    "Yea, though I walk through the valley of the shadow of death, I will fear no evil: for thou art with me; thy rod and thy staff they comfort me.",
    "Thou preparest a table before me in the presence of mine enemies: thou anointest my head with oil; my cup runneth over.",
    "Surely goodness and mercy shall follow me all the days of my life: and I will dwell in the house of the LORD for ever.",
];

/// Psalm 23 per version code; the first entry is the reader's default
const PSALM_23: &[(&str, &[&str])] = &[("NVI", PSALM_23_NVI), ("KJV", PSALM_23_KJV)];

/// (id, title, content, date, verse reference)
const DEVOTIONALS: &[(&str, &str, &str, &str, &str)] = &[
    (
        "devotional-2024-01-18",
        "Finding Peace in His Presence",
        "In the stillness of the morning, we find God's presence. Like a shepherd leading his sheep to still waters, He guides us to places of rest and renewal. Today, take a moment to be still and know that He is God.",
        "2024-01-18",
        "Psalm 46:10",
    ),
    (
        "devotional-2024-01-17",
        "Grace in the Morning",
        "Each new day brings fresh mercies and grace. As the sun rises over the ocean, so does God's faithfulness rise with every morning. His compassions never fail, and His love is new every morning.",
        "2024-01-17",
        "Lamentations 3:22-23",
    ),
    (
        "devotional-2024-01-16",
        "Walking in Faith",
        "The journey of faith is like walking through a forest path - sometimes we can't see far ahead, but we trust the One who guides our steps. Each step forward is an act of faith.",
        "2024-01-16",
        "Proverbs 3:5-6",
    ),
    (
        "devotional-2024-01-15",
        "The Power of Prayer",
        "Prayer is our direct line to the throne of grace. When we bow our heads and lift our hearts, we enter into communion with the Creator of the universe. He hears every word, every sigh, every silent plea.",
        "2024-01-15",
        "Philippians 4:6-7",
    ),
];

struct PlanSeed {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    duration: i32,
    plan_type: PlanType,
    /// Empty means the whole canon
    books: &'static [&'static str],
}

const PLANS: &[PlanSeed] = &[
    PlanSeed {
        id: "bible-in-a-year",
        name: "Bible in a Year",
        description: "Read the whole Bible in canonical order over 365 days",
        duration: 365,
        plan_type: PlanType::Annual,
        books: &[],
    },
    PlanSeed {
        id: "faith-journey",
        name: "Faith Journey",
        description: "Thirty days through Hebrews, James and Romans",
        duration: 30,
        plan_type: PlanType::Thematic,
        books: &["heb", "jas", "rom"],
    },
    PlanSeed {
        id: "hope-and-healing",
        name: "Hope & Healing",
        description: "Three weeks in Lamentations, 1 Peter and John",
        duration: 21,
        plan_type: PlanType::Thematic,
        books: &["lam", "1pe", "joh"],
    },
];

/// (id, question, answer, category)
const QA_ITEMS: &[(&str, &str, &str, &str)] = &[
    (
        "qa-moses",
        "Who was Moses?",
        "Moses was a prophet and leader of the Israelites who led them out of slavery in Egypt. He received the Ten Commandments from God on Mount Sinai and is one of the most important figures in the Old Testament. Moses authored the first five books of the Bible, known as the Torah or Pentateuch.",
        "Biblical Figures",
    ),
    (
        "qa-last-supper",
        "What is the significance of the Last Supper?",
        "The Last Supper was the final meal Jesus shared with his disciples before his crucifixion. During this meal, Jesus instituted the practice of communion (or the Eucharist), breaking bread and sharing wine as symbols of his body and blood. This event is commemorated by Christians worldwide.",
        "History",
    ),
    (
        "qa-faith",
        "What does it mean to have faith?",
        "Faith, according to Hebrews 11:1, is 'the assurance of things hoped for, the conviction of things not seen.' It involves trust in God and His promises, even when we cannot see the outcome. Faith is both believing in God's existence and trusting in His character and promises.",
        "Theology",
    ),
    (
        "qa-king-david",
        "Who was King David?",
        "David was the second king of Israel, known for defeating Goliath as a young shepherd and later uniting the tribes of Israel. He was a man after God's own heart, despite his flaws, and authored many of the Psalms. Jesus Christ is referred to as a descendant of David.",
        "Biblical Figures",
    ),
    (
        "qa-grace",
        "What is grace?",
        "Grace is God's unmerited favor and love toward humanity. It is a gift that cannot be earned through good works or righteousness. Through grace, believers receive salvation and forgiveness of sins through faith in Jesus Christ (Ephesians 2:8-9).",
        "Theology",
    ),
    (
        "qa-great-commission",
        "What is the Great Commission?",
        "The Great Commission refers to Jesus' instruction to his disciples in Matthew 28:18-20 to 'go and make disciples of all nations.' It emphasizes spreading the Gospel message, baptizing believers, and teaching them to obey Jesus' commands.",
        "Teachings",
    ),
];

struct MediaSeed {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    media_type: MediaType,
    url: &'static str,
    duration: Option<i32>,
    category: Option<&'static str>,
}

const MULTIMEDIA: &[MediaSeed] = &[
    MediaSeed {
        id: "video-psalms",
        title: "Understanding the Book of Psalms",
        description: "An in-depth study of the Psalms and their historical context",
        media_type: MediaType::Video,
        url: "https://media.example.com/videos/understanding-psalms",
        duration: Some(924),
        category: Some("Bible Study"),
    },
    MediaSeed {
        id: "video-ancient-israel",
        title: "Biblical History: Ancient Israel",
        description: "Explore the history of ancient Israel and its significance",
        media_type: MediaType::Video,
        url: "https://media.example.com/videos/ancient-israel",
        duration: Some(1330),
        category: Some("History"),
    },
    MediaSeed {
        id: "video-parables",
        title: "The Parables of Jesus Explained",
        description: "Understand the deeper meanings of Jesus' parables",
        media_type: MediaType::Video,
        url: "https://media.example.com/videos/parables",
        duration: Some(1125),
        category: Some("Teachings"),
    },
    MediaSeed {
        id: "video-new-testament",
        title: "Overview of the New Testament",
        description: "A comprehensive guide to the New Testament books",
        media_type: MediaType::Video,
        url: "https://media.example.com/videos/new-testament-overview",
        duration: Some(1710),
        category: Some("Bible Study"),
    },
    MediaSeed {
        id: "podcast-daily-devotional",
        title: "Daily Devotional Podcast",
        description: "Short daily reflections on scripture",
        media_type: MediaType::Podcast,
        url: "https://media.example.com/podcasts/daily-devotional",
        duration: None,
        category: Some("Devotional"),
    },
    MediaSeed {
        id: "podcast-deep-dive",
        title: "Bible Study Deep Dive",
        description: "Weekly in-depth biblical analysis",
        media_type: MediaType::Podcast,
        url: "https://media.example.com/podcasts/deep-dive",
        duration: None,
        category: Some("Study"),
    },
    MediaSeed {
        id: "podcast-faith-conversations",
        title: "Faith Conversations",
        description: "Discussions about faith and modern life",
        media_type: MediaType::Podcast,
        url: "https://media.example.com/podcasts/faith-conversations",
        duration: None,
        category: Some("Discussion"),
    },
    MediaSeed {
        id: "music-worship-essentials",
        title: "Worship Essentials",
        description: "Classic worship songs and hymns",
        media_type: MediaType::Music,
        url: "https://media.example.com/music/worship-essentials",
        duration: None,
        category: None,
    },
    MediaSeed {
        id: "music-contemporary",
        title: "Contemporary Christian",
        description: "Modern Christian music playlist",
        media_type: MediaType::Music,
        url: "https://media.example.com/music/contemporary-christian",
        duration: None,
        category: None,
    },
];

/// (id, question, options, correct index, category)
const QUIZ_QUESTIONS: &[(&str, &str, &[&str], i32, &str)] = &[
    (
        "quiz-exodus-leader",
        "Who led the Israelites out of Egypt?",
        &["Abraham", "Moses", "David", "Solomon"],
        1,
        "Old Testament",
    ),
    (
        "quiz-disciples",
        "How many disciples did Jesus have?",
        &["10", "11", "12", "13"],
        2,
        "New Testament",
    ),
    (
        "quiz-first-book",
        "What is the first book of the Bible?",
        &["Exodus", "Genesis", "Leviticus", "Numbers"],
        1,
        "General",
    ),
    (
        "quiz-psalms-author",
        "Who wrote most of the Psalms?",
        &["Solomon", "David", "Moses", "Isaiah"],
        1,
        "Old Testament",
    ),
    (
        "quiz-birthplace",
        "In which city was Jesus born?",
        &["Nazareth", "Jerusalem", "Bethlehem", "Capernaum"],
        2,
        "New Testament",
    ),
];

/// (id, book, chapter, verse, text, category)
const FLASHCARDS: &[(&str, &str, i32, i32, &str, &str)] = &[
    (
        "card-joh-3-16",
        "joh",
        3,
        16,
        "For God so loved the world, that he gave his only Son, that whoever believes in him should not perish but have eternal life.",
        "Salvation",
    ),
    (
        "card-psa-23-1",
        "psa",
        23,
        1,
        "The LORD is my shepherd; I shall not want.",
        "Comfort",
    ),
    (
        "card-php-4-13",
        "php",
        4,
        13,
        "I can do all things through him who strengthens me.",
        "Strength",
    ),
    (
        "card-pro-3-5",
        "pro",
        3,
        5,
        "Trust in the LORD with all your heart, and do not lean on your own understanding. In all your ways acknowledge him, and he will make straight your paths.",
        "Wisdom",
    ),
    (
        "card-rom-8-28",
        "rom",
        8,
        28,
        "And we know that for those who love God all things work together for good, for those who are called according to his purpose.",
        "Hope",
    ),
];

/// One book's chapter range on one plan day
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedReading {
    pub day: i32,
    pub book_id: String,
    pub start_chapter: i32,
    pub end_chapter: i32,
}

/// Spread the chapters of `books` (id, chapter count) over `days` days.
///
/// Day `d` covers the global chapter slice `[(d-1)*T/D, d*T/D)`, split at
/// book boundaries, so every chapter is read exactly once and day sizes
/// differ by at most one chapter. Days left empty when `days` exceeds the
/// chapter count produce no readings.
pub fn spread_chapters(books: &[(&str, i32)], days: i32) -> Vec<PlannedReading> {
    let total: i64 = books.iter().map(|(_, chapters)| i64::from(*chapters)).sum();
    if days <= 0 || total == 0 {
        return Vec::new();
    }

    let mut readings = Vec::new();
    for day in 1..=days {
        let from = (i64::from(day) - 1) * total / i64::from(days);
        let to = i64::from(day) * total / i64::from(days);

        let mut offset = 0i64;
        for (book_id, chapters) in books {
            let book_end = offset + i64::from(*chapters);
            let start = from.max(offset);
            let end = to.min(book_end);
            if start < end {
                readings.push(PlannedReading {
                    day,
                    book_id: book_id.to_string(),
                    start_chapter: (start - offset + 1) as i32,
                    end_chapter: (end - offset) as i32,
                });
            }
            offset = book_end;
        }
    }
    readings
}

fn chapter_count(book_id: &str) -> Option<i32> {
    BOOKS
        .iter()
        .find(|(id, _, _, _)| *id == book_id)
        .map(|(_, _, _, chapters)| *chapters)
}

fn plan_books(plan: &PlanSeed) -> Result<Vec<(&'static str, i32)>, DatabaseError> {
    if plan.books.is_empty() {
        return Ok(BOOKS.iter().map(|(id, _, _, chapters)| (*id, *chapters)).collect());
    }
    plan.books
        .iter()
        .map(|id| {
            chapter_count(id)
                .map(|chapters| (*id, chapters))
                .ok_or_else(|| DatabaseError::Query(format!("plan {} references unknown book {}", plan.id, id)))
        })
        .collect()
}

/// Insert all reference data. Returns the number of rows newly inserted.
pub async fn seed(pool: &PgPool) -> Result<u64, DatabaseError> {
    let mut tx = pool.begin().await?;
    let mut inserted = 0;

    inserted += seed_books(&mut tx).await?;
    inserted += seed_verses(&mut tx).await?;
    inserted += seed_devotionals(&mut tx).await?;
    inserted += seed_plans(&mut tx).await?;
    inserted += seed_qa(&mut tx).await?;
    inserted += seed_multimedia(&mut tx).await?;
    inserted += seed_quiz(&mut tx).await?;
    inserted += seed_flashcards(&mut tx).await?;

    tx.commit().await?;
    info!(rows = inserted, "Seeded reference data");
    Ok(inserted)
}

async fn seed_books(tx: &mut Transaction<'_, Postgres>) -> Result<u64, DatabaseError> {
    let mut inserted = 0;
    for (index, (id, name, abbreviation, chapters)) in BOOKS.iter().enumerate() {
        let testament = if index < NEW_TESTAMENT_START {
            Testament::Old
        } else {
            Testament::New
        };
        inserted += sqlx::query(
            r#"INSERT INTO bible_books (id, name, testament, "order", chapters, abbreviation)
               VALUES ($1, $2, $3, $4, $5, $6)
               ON CONFLICT (id) DO NOTHING"#,
        )
        .bind(id)
        .bind(name)
        .bind(testament.as_str())
        .bind(index as i32 + 1)
        .bind(chapters)
        .bind(abbreviation)
        .execute(&mut **tx)
        .await?
        .rows_affected();
    }
    Ok(inserted)
}

async fn seed_verses(tx: &mut Transaction<'_, Postgres>) -> Result<u64, DatabaseError> {
    let mut inserted = 0;
    for (version, verses) in PSALM_23 {
        for (index, text) in verses.iter().enumerate() {
            let verse = index as i32 + 1;
            inserted += sqlx::query(
                "INSERT INTO bible_verses (id, book_id, chapter, verse, version, text)
                 VALUES ($1, 'psa', 23, $2, $3, $4)
                 ON CONFLICT (id) DO NOTHING",
            )
            .bind(format!("psa.23.{}.{}", verse, version.to_lowercase()))
            .bind(verse)
            .bind(version)
            .bind(text)
            .execute(&mut **tx)
            .await?
            .rows_affected();
        }
    }
    Ok(inserted)
}

async fn seed_devotionals(tx: &mut Transaction<'_, Postgres>) -> Result<u64, DatabaseError> {
    let mut inserted = 0;
    for (id, title, content, date, reference) in DEVOTIONALS {
        inserted += sqlx::query(
            "INSERT INTO devotionals (id, title, content, date, verse_reference)
             VALUES ($1, $2, $3, $4::date, $5)
             ON CONFLICT (id) DO NOTHING",
        )
        .bind(id)
        .bind(title)
        .bind(content)
        .bind(date)
        .bind(reference)
        .execute(&mut **tx)
        .await?
        .rows_affected();
    }
    Ok(inserted)
}

async fn seed_plans(tx: &mut Transaction<'_, Postgres>) -> Result<u64, DatabaseError> {
    let mut inserted = 0;
    for plan in PLANS {
        inserted += sqlx::query(
            "INSERT INTO reading_plans (id, name, description, duration, type)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (id) DO NOTHING",
        )
        .bind(plan.id)
        .bind(plan.name)
        .bind(plan.description)
        .bind(plan.duration)
        .bind(plan.plan_type.as_str())
        .execute(&mut **tx)
        .await?
        .rows_affected();

        for reading in spread_chapters(&plan_books(plan)?, plan.duration) {
            inserted += sqlx::query(
                "INSERT INTO reading_plan_days (id, plan_id, day, book_id, start_chapter, end_chapter)
                 VALUES ($1, $2, $3, $4, $5, $6)
                 ON CONFLICT (id) DO NOTHING",
            )
            .bind(format!("{}-d{}-{}", plan.id, reading.day, reading.book_id))
            .bind(plan.id)
            .bind(reading.day)
            .bind(&reading.book_id)
            .bind(reading.start_chapter)
            .bind(reading.end_chapter)
            .execute(&mut **tx)
            .await?
            .rows_affected();
        }
    }
    Ok(inserted)
}

async fn seed_qa(tx: &mut Transaction<'_, Postgres>) -> Result<u64, DatabaseError> {
    let mut inserted = 0;
    for (id, question, answer, category) in QA_ITEMS {
        inserted += sqlx::query(
            "INSERT INTO qa_items (id, question, answer, category)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (id) DO NOTHING",
        )
        .bind(id)
        .bind(question)
        .bind(answer)
        .bind(category)
        .execute(&mut **tx)
        .await?
        .rows_affected();
    }
    Ok(inserted)
}

async fn seed_multimedia(tx: &mut Transaction<'_, Postgres>) -> Result<u64, DatabaseError> {
    let mut inserted = 0;
    for item in MULTIMEDIA {
        inserted += sqlx::query(
            "INSERT INTO multimedia_content (id, title, description, type, url, duration, category)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             ON CONFLICT (id) DO NOTHING",
        )
        .bind(item.id)
        .bind(item.title)
        .bind(item.description)
        .bind(item.media_type.as_str())
        .bind(item.url)
        .bind(item.duration)
        .bind(item.category)
        .execute(&mut **tx)
        .await?
        .rows_affected();
    }
    Ok(inserted)
}

async fn seed_quiz(tx: &mut Transaction<'_, Postgres>) -> Result<u64, DatabaseError> {
    let mut inserted = 0;
    for (id, question, options, correct, category) in QUIZ_QUESTIONS {
        let options: Vec<String> = options.iter().map(|o| o.to_string()).collect();
        inserted += sqlx::query(
            "INSERT INTO quiz_questions (id, question, options, correct_answer, category)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (id) DO NOTHING",
        )
        .bind(id)
        .bind(question)
        .bind(&options)
        .bind(correct)
        .bind(category)
        .execute(&mut **tx)
        .await?
        .rows_affected();
    }
    Ok(inserted)
}

async fn seed_flashcards(tx: &mut Transaction<'_, Postgres>) -> Result<u64, DatabaseError> {
    let mut inserted = 0;
    for (id, book_id, chapter, verse, text, category) in FLASHCARDS {
        inserted += sqlx::query(
            "INSERT INTO flashcards (id, book_id, chapter, verse, verse_text, category)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT (id) DO NOTHING",
        )
        .bind(id)
        .bind(book_id)
        .bind(chapter)
        .bind(verse)
        .bind(text)
        .bind(category)
        .execute(&mut **tx)
        .await?
        .rows_affected();
    }
    Ok(inserted)
}
