use crate::model::Book;

#[allow(clippy::too_many_arguments)]
fn book(
    id: u32,
    title: &str,
    author: &str,
    rating: f32,
    description: &str,
    sample_type: &str,
    categories: &[&str],
    published: &str,
    publisher: &str,
    download_url: &str,
) -> Book {
    Book {
        id,
        title: title.into(),
        author: author.into(),
        description: description.into(),
        rating,
        categories: categories.iter().map(|c| c.to_string()).collect(),
        sample_type: sample_type.into(),
        published_date: Some(published.into()),
        publisher: Some(publisher.into()),
        download_url: download_url.into(),
    }
}

pub(super) fn all() -> Vec<Book> {
    vec![
        book(
            1,
            "Eloquent JavaScript",
            "Marijn Haverbeke",
            4.5,
            "A modern introduction to programming, teaching the essential fundamentals of JavaScript.",
            "Sample Chapter",
            &["Programming", "JavaScript", "Web Development"],
            "2018-12-04",
            "No Starch Press",
            "/files/book-sample.pdf",
        ),
        book(
            2,
            "Clean Code",
            "Robert C. Martin",
            5.0,
            "A handbook of agile software craftsmanship that helps you write better, more maintainable code.",
            "Code Examples",
            &["Programming", "Software Engineering", "Best Practices"],
            "2008-08-11",
            "Prentice Hall",
            "/files/code-examples.pdf",
        ),
        book(
            3,
            "React Design Patterns",
            "Carlos Santana Roldán",
            4.0,
            "Learn how to build efficient user interfaces with React by reusing code and creating reusable components.",
            "Sample Chapter",
            &["Programming", "React", "JavaScript", "Web Development"],
            "2018-07-19",
            "Packt Publishing",
            "/files/book-sample.pdf",
        ),
        book(
            4,
            "Learning TypeScript",
            "Josh Goldberg",
            4.5,
            "Enhance your JavaScript skills by learning TypeScript, a typed superset of JavaScript that builds on its syntax.",
            "Code Examples",
            &["Programming", "TypeScript", "JavaScript"],
            "2022-06-21",
            "O'Reilly Media",
            "/files/code-examples.pdf",
        ),
        book(
            5,
            "CSS Secrets",
            "Lea Verou",
            4.8,
            "Better solutions to everyday web design problems using advanced CSS techniques and latest best practices.",
            "Sample Chapter",
            &["Web Development", "CSS", "Design"],
            "2015-06-22",
            "O'Reilly Media",
            "/files/book-sample.pdf",
        ),
        book(
            6,
            "Design Patterns",
            "Erich Gamma, Richard Helm, Ralph Johnson, John Vlissides",
            4.7,
            "Elements of Reusable Object-Oriented Software - the classic book on software design patterns.",
            "Code Examples",
            &["Programming", "Object-Oriented", "Software Architecture"],
            "1994-10-31",
            "Addison-Wesley Professional",
            "/files/code-examples.pdf",
        ),
        book(
            7,
            "Node.js Design Patterns",
            "Mario Casciaro, Luciano Mammino",
            4.6,
            "Implement proven solutions to common problems in Node.js development with this comprehensive guide.",
            "Sample Chapter",
            &["Node.js", "JavaScript", "Backend Development"],
            "2020-07-17",
            "Packt Publishing",
            "/files/book-sample.pdf",
        ),
        book(
            8,
            "The Pragmatic Programmer",
            "David Thomas, Andrew Hunt",
            4.9,
            "Your journey to mastery - classic guide to better programming with practical advice and professional insights.",
            "Code Examples",
            &["Programming", "Software Engineering", "Career Development"],
            "2019-09-23",
            "Addison-Wesley Professional",
            "/files/code-examples.pdf",
        ),
    ]
}
