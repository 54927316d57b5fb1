use crate::model::{SearchItem, SearchKind};

fn item(id: &str, title: &str, kind: SearchKind, description: &str) -> SearchItem {
    let url = match kind {
        SearchKind::Book => "#books",
        SearchKind::Course => "#courses",
        SearchKind::Source => "#services",
    };
    SearchItem {
        id: id.into(),
        title: title.into(),
        kind,
        description: description.into(),
        url: url.into(),
    }
}

pub(super) fn all() -> Vec<SearchItem> {
    use SearchKind::{Book, Course, Source};

    vec![
        item(
            "book-1",
            "Modern Web Development",
            Book,
            "A comprehensive guide to modern web development techniques and best practices.",
        ),
        item(
            "book-2",
            "React Patterns and Practices",
            Book,
            "Learn advanced React patterns and best practices for building scalable applications.",
        ),
        item(
            "book-3",
            "TypeScript Deep Dive",
            Book,
            "Master TypeScript with this in-depth guide to its features and capabilities.",
        ),
        item(
            "book-4",
            "CSS Mastery",
            Book,
            "Advanced techniques for modern CSS styling and layouts.",
        ),
        item(
            "course-1",
            "Complete React Developer Course",
            Course,
            "Learn React from scratch and build real-world applications.",
        ),
        item(
            "course-2",
            "Advanced JavaScript Concepts",
            Course,
            "Deep dive into advanced JavaScript concepts like closures, prototypes, and async patterns.",
        ),
        item(
            "course-3",
            "Full Stack Web Development",
            Course,
            "Build complete web applications with modern frontend and backend technologies.",
        ),
        item(
            "course-4",
            "UI/UX Design Fundamentals",
            Course,
            "Learn the principles of good UI/UX design and how to apply them to your projects.",
        ),
        item(
            "source-1",
            "React Component Library",
            Source,
            "A collection of reusable React components for building modern web applications.",
        ),
        item(
            "source-2",
            "E-commerce Platform Starter",
            Source,
            "Source code for a complete e-commerce platform with shopping cart and payment integration.",
        ),
        item(
            "source-3",
            "Authentication System",
            Source,
            "Secure authentication system with JWT, OAuth, and role-based access control.",
        ),
        item(
            "source-4",
            "API Integration Examples",
            Source,
            "Examples of integrating with popular APIs using modern JavaScript techniques.",
        ),
    ]
}
