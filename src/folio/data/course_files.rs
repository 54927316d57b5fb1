use crate::model::{CourseFile, FileKind};

fn pdf(
    id: u32,
    title: &str,
    description: &str,
    download_url: &str,
    last_updated: &str,
    size: &str,
    downloads: u64,
) -> CourseFile {
    CourseFile {
        id,
        title: title.into(),
        description: description.into(),
        file_type: FileKind::Pdf,
        last_updated: last_updated.into(),
        size: size.into(),
        downloads,
        download_url: download_url.into(),
    }
}

pub(super) fn all() -> Vec<CourseFile> {
    vec![
        pdf(
            1,
            "Analog Electronics",
            "Learn the basics of analog electronics and build circuits from scratch.",
            "/files/EM2_Exp-6_23-50639-1.pdf",
            "June 15, 2023",
            "2.5 MB",
            1234,
        ),
        pdf(
            2,
            "Digital Logic & Circuits",
            "Understand the fundamentals of digital logic and design circuits.",
            "/files/react-beginners.pdf",
            "July 1, 2023",
            "1.8 MB",
            856,
        ),
        pdf(
            3,
            "Modern Control Systems",
            "Explore the principles of modern control systems.",
            "/files/advanced-css.pdf",
            "June 28, 2023",
            "3.2 MB",
            2156,
        ),
        pdf(
            4,
            "Signal & Linear Systems",
            "Learn about signals and linear systems and their applications.",
            "/files/ami-ekjon-salsman-bangla.pdf",
            "July 5, 2023",
            "1.5 MB",
            567,
        ),
        pdf(
            5,
            "Industrial Electronics & Drives",
            "Study the concepts of industrial electronics and drives in detail.",
            "/files/ami-ekjon-salsman-bangla.pdf",
            "July 5, 2023",
            "1.5 MB",
            567,
        ),
        pdf(
            6,
            "VLSI",
            "Learn about the design and implementation of VLSI circuits.",
            "/files/ami-ekjon-salsman-bangla.pdf",
            "July 5, 2023",
            "1.5 MB",
            567,
        ),
        pdf(
            7,
            "Power Systems Analysis",
            "Comprehensive study of power systems analysis and design principles.",
            "/files/power-systems.pdf",
            "August 12, 2023",
            "4.8 MB",
            1892,
        ),
        pdf(
            8,
            "Microprocessors & Microcontrollers",
            "Learn about microprocessors and microcontrollers and their applications in embedded systems.",
            "/files/microprocessors.pdf",
            "September 3, 2023",
            "3.7 MB",
            2304,
        ),
        pdf(
            9,
            "Communication Systems",
            "Explore analog and digital communication systems, modulation techniques, and signal processing.",
            "/files/communication-systems.pdf",
            "July 28, 2023",
            "5.2 MB",
            1756,
        ),
        pdf(
            10,
            "Electromagnetic Field Theory",
            "Fundamentals of electromagnetic fields, Maxwell's equations, and wave propagation.",
            "/files/electromagnetic-theory.pdf",
            "August 5, 2023",
            "4.1 MB",
            1425,
        ),
    ]
}
