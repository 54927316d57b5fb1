//! Accessor and comparator tables for each catalog record type.

use super::{CatalogRecord, Facet, SortRule};
use crate::keyword::keyword_enum;
use crate::model::{Book, Card, CourseFile};

keyword_enum! {
    #[derive(Default)]
    pub enum BookSort("book sort") {
        #[default]
        Default => "default" | "id",
        Title => "title",
        Rating => "rating",
        Date => "date" | "newest",
    }
}

keyword_enum! {
    #[derive(Default)]
    pub enum CardSort("source code sort") {
        #[default]
        Default => "default" | "id",
        Title => "title",
        Date => "date" | "newest",
        Size => "size",
    }
}

keyword_enum! {
    #[derive(Default)]
    pub enum CourseFileSort("course file sort") {
        #[default]
        Default => "default" | "id",
        Title => "title",
        Downloads => "downloads" | "popular",
        Date => "date" | "newest",
    }
}

impl CatalogRecord for Book {
    type Sort = BookSort;
    const NAME: &'static str = "books";
    const FACETS: &'static [Facet] = &[Facet::Category, Facet::SampleType];

    fn id(&self) -> u32 {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.author, &self.description]
    }

    fn facet_values(&self, facet: Facet) -> Vec<&str> {
        match facet {
            Facet::Category => self.categories.iter().map(String::as_str).collect(),
            Facet::SampleType => vec![self.sample_type.as_str()],
            _ => Vec::new(),
        }
    }

    fn sort_rule(sort: BookSort) -> SortRule<Self> {
        match sort {
            BookSort::Default => SortRule::Id,
            BookSort::Title => SortRule::Title,
            BookSort::Rating => SortRule::Descending(|b| Some(f64::from(b.rating))),
            BookSort::Date => SortRule::NewestFirst(Book::published_on),
        }
    }
}

impl CatalogRecord for Card {
    type Sort = CardSort;
    const NAME: &'static str = "source code";
    const FACETS: &'static [Facet] = &[
        Facet::Category,
        Facet::FileType,
        Facet::Platform,
        Facet::Technology,
    ];

    fn id(&self) -> u32 {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.title.as_str(), self.description.as_str()];
        fields.extend(self.technologies.iter().map(String::as_str));
        fields
    }

    fn facet_values(&self, facet: Facet) -> Vec<&str> {
        match facet {
            Facet::Category => self.category.as_deref().into_iter().collect(),
            Facet::FileType => vec![self.file_type.as_str()],
            Facet::Platform => self.platform.as_deref().into_iter().collect(),
            Facet::Technology => self.technologies.iter().map(String::as_str).collect(),
            Facet::SampleType => Vec::new(),
        }
    }

    fn sort_rule(sort: CardSort) -> SortRule<Self> {
        match sort {
            CardSort::Default => SortRule::Id,
            CardSort::Title => SortRule::Title,
            CardSort::Date => SortRule::NewestFirst(Card::updated_on),
            CardSort::Size => SortRule::Descending(Card::size_value),
        }
    }
}

impl CatalogRecord for CourseFile {
    type Sort = CourseFileSort;
    const NAME: &'static str = "course files";
    const FACETS: &'static [Facet] = &[Facet::FileType];

    fn id(&self) -> u32 {
        self.id
    }

    fn title(&self) -> &str {
        &self.title
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![&self.title, &self.description]
    }

    fn facet_values(&self, facet: Facet) -> Vec<&str> {
        match facet {
            Facet::FileType => vec![self.file_type.as_str()],
            _ => Vec::new(),
        }
    }

    fn sort_rule(sort: CourseFileSort) -> SortRule<Self> {
        match sort {
            CourseFileSort::Default => SortRule::Id,
            CourseFileSort::Title => SortRule::Title,
            CourseFileSort::Downloads => SortRule::Descending(|f| Some(f.downloads as f64)),
            CourseFileSort::Date => SortRule::NewestFirst(CourseFile::updated_on),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    #[test]
    fn sort_keys_parse_from_cli_spelling() {
        assert_eq!("rating".parse::<BookSort>().unwrap(), BookSort::Rating);
        assert_eq!("Size".parse::<CardSort>().unwrap(), CardSort::Size);
        assert_eq!(
            "downloads".parse::<CourseFileSort>().unwrap(),
            CourseFileSort::Downloads
        );
        assert!("size".parse::<BookSort>().is_err());
    }

    #[test]
    fn missing_card_fields_have_no_facet_value() {
        let mut card = data::cards()[0].clone();
        card.platform = None;
        assert!(card.facet_values(Facet::Platform).is_empty());
        assert_eq!(card.facet_values(Facet::Category), vec!["Frontend"]);
    }

    #[test]
    fn card_search_covers_technologies() {
        let card = &data::cards()[0];
        assert!(card.search_fields().contains(&"React"));
    }
}
