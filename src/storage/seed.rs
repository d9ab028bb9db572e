//! Sample postings inserted into an empty store on first run.

use crate::storage::NewJobPosting;

fn posting(
    title: &str,
    company: &str,
    location: &str,
    salary: i64,
    description: &str,
    skills: &[&str],
) -> NewJobPosting {
    NewJobPosting {
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        salary,
        description: description.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
    }
}

/// The fixed sample postings, in insertion order.
pub fn sample_jobs() -> Vec<NewJobPosting> {
    vec![
        posting(
            "AI Intern",
            "CloudBrain",
            "Remote",
            15_000,
            "Work on AI models, APIs, and backend pipelines.",
            &["python", "ml", "fastapi", "numpy"],
        ),
        posting(
            "Machine Learning Engineer",
            "NeuroTech Labs",
            "Bangalore",
            80_000,
            "Build and deploy ML pipelines and predictive models.",
            &["python", "scikit-learn", "pandas", "mlops"],
        ),
        posting(
            "Data Scientist",
            "DataHive",
            "Mumbai",
            70_000,
            "Analyze data and build dashboards.",
            &["python", "statistics", "pandas", "matplotlib"],
        ),
        posting(
            "Backend Engineer (AI Systems)",
            "DeepStack",
            "Remote",
            90_000,
            "Develop scalable APIs for AI systems.",
            &["python", "fastapi", "sqlalchemy", "docker"],
        ),
        posting(
            "Prompt Engineer",
            "GenAI Labs",
            "Remote",
            60_000,
            "Design prompts and AI workflows.",
            &["llm", "prompt-engineering", "ai-tools"],
        ),
    ]
}
