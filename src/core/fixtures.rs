//! Seed data served by the service.
//!
//! The candidate list, dashboard tiles and filter choices are read-only and
//! built once at startup.

use crate::models::{Candidate, DashboardStat, FilterOption, FilterOptions, SalaryThreshold};

#[allow(clippy::too_many_arguments)]
fn candidate(
    id: u32,
    name: &str,
    email: &str,
    role: &str,
    experience: &str,
    location: &str,
    salary: &str,
    skills: &[&str],
    match_score: u8,
) -> Candidate {
    Candidate {
        id,
        name: name.to_string(),
        email: email.to_string(),
        role: role.to_string(),
        experience: experience.to_string(),
        location: location.to_string(),
        salary: salary.to_string(),
        skills: skills.iter().map(|s| s.to_string()).collect(),
        match_score,
    }
}

/// The five seeded candidates, in display order
pub fn seed_candidates() -> Vec<Candidate> {
    vec![
        candidate(
            1,
            "John Doe",
            "john.doe@email.com",
            "Senior React Developer",
            "5 years",
            "San Francisco, CA",
            "$120,000 - $150,000",
            &["React", "TypeScript", "Node.js", "AWS"],
            95,
        ),
        candidate(
            2,
            "Jane Smith",
            "jane.smith@email.com",
            "Full Stack Developer",
            "3 years",
            "New York, NY",
            "$100,000 - $130,000",
            &["JavaScript", "Python", "PostgreSQL", "Docker"],
            88,
        ),
        candidate(
            3,
            "Mike Johnson",
            "mike.j@email.com",
            "Backend Engineer",
            "4 years",
            "Austin, TX",
            "$110,000 - $140,000",
            &["Python", "Django", "Redis", "AWS"],
            92,
        ),
        candidate(
            4,
            "Sarah Williams",
            "sarah.w@email.com",
            "UI/UX Designer",
            "2 years",
            "Seattle, WA",
            "$90,000 - $120,000",
            &["Figma", "React", "CSS", "User Research"],
            85,
        ),
        candidate(
            5,
            "David Brown",
            "david.b@email.com",
            "DevOps Engineer",
            "6 years",
            "Chicago, IL",
            "$130,000 - $160,000",
            &["Kubernetes", "Terraform", "AWS", "CI/CD"],
            90,
        ),
    ]
}

pub fn dashboard_stats() -> Vec<DashboardStat> {
    [
        ("Total Resumes", "2,451", "+12%"),
        ("New This Week", "156", "+8%"),
        ("Match Rate", "89%", "+3%"),
    ]
    .into_iter()
    .map(|(label, value, trend)| DashboardStat {
        label: label.to_string(),
        value: value.to_string(),
        trend: trend.to_string(),
    })
    .collect()
}

fn option(value: &str, label: &str) -> FilterOption {
    FilterOption {
        value: value.to_string(),
        label: label.to_string(),
    }
}

/// Choices offered by the search screen's filter dropdowns
pub fn filter_options() -> FilterOptions {
    FilterOptions {
        experience: vec![
            option("2", "Junior (2+ years)"),
            option("3", "Mid-level (3+ years)"),
            option("5", "Senior (5+ years)"),
            option("6", "Lead (6+ years)"),
        ],
        locations: ["San Francisco", "New York", "Austin", "Seattle", "Chicago"]
            .into_iter()
            .map(|city| option(city, city))
            .collect(),
        salary_ranges: SalaryThreshold::ALL
            .into_iter()
            .map(|threshold| {
                let label = format!("${},000+", threshold.floor() / 1000);
                option(threshold.token(), &label)
            })
            .collect(),
    }
}
