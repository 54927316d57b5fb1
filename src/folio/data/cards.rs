use crate::icons::Icon;
use crate::model::Card;

struct Draft<'a> {
    id: u32,
    title: &'a str,
    description: &'a str,
    icon: Icon,
    file_type: &'a str,
    technologies: &'a [&'a str],
    last_updated: &'a str,
    size: &'a str,
    category: &'a str,
    author: &'a str,
    platform: &'a str,
    download_url: &'a str,
}

impl From<Draft<'_>> for Card {
    fn from(d: Draft<'_>) -> Self {
        Card {
            id: d.id,
            title: d.title.into(),
            description: d.description.into(),
            icon: d.icon,
            technologies: d.technologies.iter().map(|t| t.to_string()).collect(),
            category: Some(d.category.into()),
            platform: Some(d.platform.into()),
            author: Some(d.author.into()),
            file_type: d.file_type.into(),
            last_updated: d.last_updated.into(),
            size: d.size.into(),
            download_url: d.download_url.into(),
        }
    }
}

const SOURCE_CODE: &str = "Source Code";
const SOURCE_URL: &str = "/files/source-code.pdf";

pub(super) fn all() -> Vec<Card> {
    [
        Draft {
            id: 1,
            title: "Web Development",
            description: "Create responsive and dynamic websites using the latest technologies and frameworks.",
            icon: Icon::Code,
            file_type: SOURCE_CODE,
            technologies: &["HTML5", "CSS3", "JavaScript", "React"],
            last_updated: "July 5, 2023",
            size: "2.8 MB",
            category: "Frontend",
            author: "Alex Johnson",
            platform: "Web",
            download_url: SOURCE_URL,
        },
        Draft {
            id: 2,
            title: "UI/UX Design",
            description: "Design beautiful user interfaces with a focus on user experience and accessibility.",
            icon: Icon::Palette,
            file_type: SOURCE_CODE,
            technologies: &["Figma", "Adobe XD", "Tailwind CSS"],
            last_updated: "June 28, 2023",
            size: "1.5 MB",
            category: "Design",
            author: "Sarah Parker",
            platform: "Web",
            download_url: SOURCE_URL,
        },
        Draft {
            id: 3,
            title: "Mobile Development",
            description: "Build cross-platform mobile applications that work seamlessly on iOS and Android.",
            icon: Icon::Mobile,
            file_type: SOURCE_CODE,
            technologies: &["React Native", "Flutter", "Firebase"],
            last_updated: "July 1, 2023",
            size: "3.2 MB",
            category: "Mobile",
            author: "Michael Chen",
            platform: "iOS/Android",
            download_url: SOURCE_URL,
        },
        Draft {
            id: 4,
            title: "Performance Optimization",
            description: "Optimize your applications for speed, efficiency, and better user experience.",
            icon: Icon::Rocket,
            file_type: SOURCE_CODE,
            technologies: &["Webpack", "Lighthouse", "PWA"],
            last_updated: "June 25, 2023",
            size: "1.8 MB",
            category: "Performance",
            author: "Emma Williams",
            platform: "Web",
            download_url: SOURCE_URL,
        },
        Draft {
            id: 5,
            title: "Principal of Power System",
            description: "Detailed explanation of the principles of power systems and their applications.",
            icon: Icon::LaptopCode,
            file_type: "BOOK",
            technologies: &[
                "Transmission Line",
                "Bundle Conductor",
                "Types of Insulator",
                "Voltage Distribution",
            ],
            last_updated: "March 14, 2025",
            size: "35 MB",
            category: "Engineering",
            author: "Rohit Mehta",
            platform: "PDF",
            download_url: "/files/Principles of Power System -- V K Mehta, Rohit Mehta.pdf",
        },
        Draft {
            id: 6,
            title: "Analytics Integration",
            description: "Implement analytics to track user behavior and improve your application.",
            icon: Icon::ChartLine,
            file_type: SOURCE_CODE,
            technologies: &["Google Analytics", "Mixpanel", "Segment"],
            last_updated: "June 30, 2023",
            size: "2.1 MB",
            category: "Analytics",
            author: "David Thompson",
            platform: "Web",
            download_url: SOURCE_URL,
        },
        Draft {
            id: 7,
            title: "Backend API Development",
            description: "Create robust and scalable APIs for your web and mobile applications.",
            icon: Icon::Server,
            file_type: SOURCE_CODE,
            technologies: &["Node.js", "Express", "MongoDB", "GraphQL"],
            last_updated: "July 15, 2023",
            size: "4.5 MB",
            category: "Backend",
            author: "James Wilson",
            platform: "Server",
            download_url: SOURCE_URL,
        },
        Draft {
            id: 8,
            title: "Cloud Infrastructure",
            description: "Deploy and manage your applications using modern cloud services and serverless architecture.",
            icon: Icon::Cloud,
            file_type: SOURCE_CODE,
            technologies: &["AWS", "Azure", "Docker", "Kubernetes"],
            last_updated: "July 10, 2023",
            size: "3.8 MB",
            category: "DevOps",
            author: "Sophia Rodriguez",
            platform: "Cloud",
            download_url: SOURCE_URL,
        },
        Draft {
            id: 9,
            title: "Machine Learning Algorithms",
            description: "Implement and understand various machine learning algorithms with practical examples.",
            icon: Icon::Brain,
            file_type: SOURCE_CODE,
            technologies: &["Python", "TensorFlow", "PyTorch", "scikit-learn"],
            last_updated: "July 20, 2023",
            size: "7.2 MB",
            category: "AI/ML",
            author: "Robert Zhang",
            platform: "Python",
            download_url: SOURCE_URL,
        },
    ]
    .into_iter()
    .map(Card::from)
    .collect()
}
