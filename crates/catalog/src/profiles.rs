use serde::Serialize;

use ajaxlab_core::RecordId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Experience {
    pub company: String,
    pub role: String,
}

/// Developer profile with nested skills and work history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeveloperProfile {
    pub id: RecordId,
    pub name: String,
    pub skills: Vec<String>,
    pub experience: Vec<Experience>,
}

const PROFILES: &[(&str, &[&str], &str, &str)] = &[
    ("王小明", &["Java", "Spring Boot"], "Google", "後端工程師"),
    ("李小美", &["JavaScript", "Vue.js", "React"], "Meta", "前端工程師"),
    ("張志豪", &["Python", "Django", "Flask"], "Amazon", "資料科學家"),
    ("陳雅婷", &["UI/UX", "Figma", "Sketch"], "Apple", "產品設計師"),
    ("林建國", &["C#", ".NET Core"], "Microsoft", "全端工程師"),
    ("黃淑芬", &["Kotlin", "Android"], "Netflix", "行動裝置開發者"),
    ("吳志偉", &["Swift", "iOS"], "Spotify", "iOS 開發者"),
    ("劉以柔", &["Docker", "Kubernetes", "AWS"], "Uber", "DevOps 工程師"),
    ("蔡宗翰", &["SQL", "PostgreSQL", "Redis"], "Oracle", "資料庫管理員"),
    ("楊佩珊", &["Go", "Microservices"], "Twitter", "後端工程師"),
    ("許家豪", &["Rust", "WebAssembly"], "Mozilla", "系統工程師"),
    ("鄭百合", &["PHP", "Laravel"], "Airbnb", "網頁開發者"),
    ("謝博文", &["Ruby", "Ruby on Rails"], "Shopify", "後端工程師"),
    ("曾欣怡", &["TypeScript", "Angular"], "IBM", "企業級應用開發者"),
    ("賴冠宇", &["Scala", "Akka", "Spark"], "LinkedIn", "大數據工程師"),
    ("蘇郁婷", &["C++", "Qt"], "Adobe", "軟體工程師"),
    ("莊偉哲", &["Unity", "C#"], "Blizzard", "遊戲開發者"),
    ("江怡君", &["Machine Learning", "TensorFlow"], "OpenAI", "AI 研究員"),
    ("羅志明", &["Cybersecurity", "Ethical Hacking"], "CrowdStrike", "資安工程師"),
    ("梁雅雯", &["Selenium", "JUnit"], "Salesforce", "測試工程師"),
];

/// The twenty fixed profiles, ids 1..=20.
pub fn developer_profiles() -> Vec<DeveloperProfile> {
    PROFILES
        .iter()
        .zip(1u64..)
        .map(|((name, skills, company, role), id)| DeveloperProfile {
            id: RecordId::new(id),
            name: name.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            experience: vec![Experience {
                company: company.to_string(),
                role: role.to_string(),
            }],
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twenty_profiles_with_sequential_ids() {
        let profiles = developer_profiles();
        assert_eq!(profiles.len(), 20);
        for (i, p) in profiles.iter().enumerate() {
            assert_eq!(p.id.get(), i as u64 + 1);
            assert_eq!(p.experience.len(), 1);
            assert!(!p.skills.is_empty());
        }
        assert_eq!(profiles[10].skills, ["Rust", "WebAssembly"]);
    }
}
