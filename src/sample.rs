//! Sample data for seeding and tests.
//!
//! `BookGenerator` owns its RNG, so two generators built from the same seed
//! produce the same books and nothing is seeded process-wide.

use crate::books::types::Book;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

const AUTHORS: &[&str] = &[
    "Haruki Murakami",
    "George Orwell",
    "Ernest Hemingway",
    "Jane Austen",
    "Agatha Christie",
    "Isaac Asimov",
    "Ray Bradbury",
    "Margaret Atwood",
    "Leo Tolstoy",
    "Virginia Woolf",
    "Ursula K. Le Guin",
    "Arthur Conan Doyle",
];

const PUBLISHERS: &[&str] = &[
    "Penguin Books",
    "HarperCollins",
    "Simon & Schuster",
    "O'Reilly Media",
    "Random House",
    "Macmillan Publishers",
    "Oxford University Press",
    "MIT Press",
    "Tor Books",
    "Vintage Books",
];

const CATEGORIES: &[&str] = &[
    "Fiction",
    "Science",
    "Fantasy",
    "Biography",
    "Philosophy",
    "Children",
    "Mystery",
];

const TAGS: &[&str] = &[
    "bestseller",
    "classic",
    "new release",
    "award-winning",
];

const DESCRIPTIONS: &[&str] = &[
    "A gripping tale of adventure and discovery.",
    "An insightful look into the human condition.",
    "A thrilling mystery that will keep you guessing.",
    "A science fiction journey through time and space.",
    "A classic novel that has stood the test of time.",
    "A dystopian narrative that warns of future possibilities.",
];

const LETTERS: &[u8] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Produces random but fully populated books.
pub struct BookGenerator {
    rng: StdRng,
}

impl BookGenerator {
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn book(&mut self) -> Book {
        let edition = self.rng.gen_range(1..=10);
        let content_words = self.rng.gen_range(20..60);

        Book {
            id: self.rng.gen_range(0..i64::MAX).to_string(),
            name: self.word(10),
            author: self.pick(AUTHORS),
            edition: format!("{} edition", ordinal(edition)),
            publisher: self.pick(PUBLISHERS),
            release_date: self.release_date(),
            description: Some(self.pick(DESCRIPTIONS)),
            page_count: self.rng.gen_range(50..1000),
            content: Some(
                (0..content_words)
                    .map(|_| {
                        let len = self.rng.gen_range(3..9);
                        self.word(len).to_lowercase()
                    })
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
            categories: Some(self.pick_many(CATEGORIES, 3)),
            tags: Some(self.pick_many(TAGS, 2)),
            rating: Some((self.rng.gen_range(0..=50) as f32) / 10.0),
            review_count: Some(self.rng.gen_range(0..10_000)),
        }
    }

    pub fn books(&mut self, count: usize) -> Vec<Book> {
        (0..count).map(|_| self.book()).collect()
    }

    fn word(&mut self, len: usize) -> String {
        (0..len)
            .map(|_| LETTERS[self.rng.gen_range(0..LETTERS.len())] as char)
            .collect()
    }

    fn pick(&mut self, items: &[&str]) -> String {
        items
            .choose(&mut self.rng)
            .map(|s| s.to_string())
            .unwrap_or_default()
    }

    /// Between one and `max` distinct items.
    fn pick_many(&mut self, items: &[&str], max: usize) -> Vec<String> {
        let count = self.rng.gen_range(1..=max.min(items.len()));
        items
            .choose_multiple(&mut self.rng, count)
            .map(|s| s.to_string())
            .collect()
    }

    fn release_date(&mut self) -> String {
        let year = self.rng.gen_range(1985..2025);
        let month = self.rng.gen_range(1..=12);
        let day = self.rng.gen_range(1..=28);
        format!("{:04}-{:02}-{:02}", year, month, day)
    }
}

fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (1, 11) | (2, 12) | (3, 13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}

/// The six titles bulk-loaded into a fresh index, keyed by ISBN.
pub fn classics() -> Vec<Book> {
    let classic = |id: &str, name: &str, author: &str, release_date: &str, page_count: u32| Book {
        id: id.to_string(),
        name: name.to_string(),
        author: author.to_string(),
        release_date: release_date.to_string(),
        page_count,
        ..Book::default()
    };

    vec![
        classic("9780553351927", "Snow Crash", "Neal Stephenson", "1992-06-01", 470),
        classic("9780441017225", "Revelation Space", "Alastair Reynolds", "2000-03-15", 585),
        classic("9780451524935", "1984", "George Orwell", "1985-06-01", 328),
        classic("9781451673319", "Fahrenheit 451", "Ray Bradbury", "1953-10-15", 227),
        classic("9780060850524", "Brave New World", "Aldous Huxley", "1932-06-01", 268),
        classic("9780385490818", "The Handmaid's Tale", "Margaret Atwood", "1985-06-01", 311),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::filter::is_date_valid;
    use std::collections::HashSet;

    #[test]
    fn test_same_seed_same_books() {
        let a = BookGenerator::seeded(7).books(5);
        let b = BookGenerator::seeded(7).books(5);
        assert_eq!(a, b);
    }

    #[test]
    fn test_generated_books_are_populated() {
        for book in BookGenerator::seeded(1).books(50) {
            assert!(!book.id.is_empty());
            assert_eq!(book.name.len(), 10);
            assert!(is_date_valid(&book.release_date), "{}", book.release_date);
            assert!(PUBLISHERS.contains(&book.publisher.as_str()));
            assert!((50..1000).contains(&book.page_count));

            let categories = book.categories.unwrap();
            assert!(!categories.is_empty() && categories.len() <= 3);
            let distinct: HashSet<_> = categories.iter().collect();
            assert_eq!(distinct.len(), categories.len());

            let rating = book.rating.unwrap();
            assert!((0.0..=5.0).contains(&rating));
        }
    }

    #[test]
    fn test_ordinal() {
        assert_eq!(ordinal(1), "1st");
        assert_eq!(ordinal(2), "2nd");
        assert_eq!(ordinal(3), "3rd");
        assert_eq!(ordinal(4), "4th");
        assert_eq!(ordinal(11), "11th");
        assert_eq!(ordinal(12), "12th");
        assert_eq!(ordinal(21), "21st");
    }

    #[test]
    fn test_classics() {
        let books = classics();
        assert_eq!(books.len(), 6);

        let ids: HashSet<_> = books.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids.len(), 6);
        assert!(books.iter().all(|b| is_date_valid(&b.release_date)));
        assert!(books.iter().all(|b| b.content.is_none()));
    }
}
