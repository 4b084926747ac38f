pub const PLAIN_EMAIL_JSON: &str = r#"{
  "profile": {
    "name": "Ann Lee",
    "title": "Frontend Engineer",
    "summary": "Ships accessible interfaces.",
    "email": "ann@example.com",
    "location": "Kupang, Indonesia",
    "linkedin": "https://linkedin.com/in/annlee",
    "github": "https://github.com/annlee",
    "website": "https://annlee.dev"
  },
  "experience": [
    { "id": 1, "role": "Engineer", "company": "Acme", "period": "2019 - 2021",
      "description": "Built the design system.", "technologies": ["Vue", "TypeScript"] },
    { "id": 2, "role": "Senior Engineer", "company": "Initech", "period": "2021 - Present",
      "description": "Leads the web team." }
  ],
  "education": [
    { "id": 1, "degree": "BSc Computer Science", "school": "Universitas Nusa Cendana", "year": "2018" }
  ],
  "skills": {
    "frontend": ["Vue", "CSS"],
    "backend": ["Rust"],
    "tools": ["Git", "Vite"]
  },
  "projects": [
    { "name": "Portfolio", "url": "https://annlee.dev" }
  ]
}"#;

pub const ENCODED_EMAIL_JSON: &str = r#"{
  "profile": {
    "name": "Joe Doe",
    "title": "Backend Engineer",
    "summary": "Writes services.",
    "encoded_email": "am9lQGV4YW1wbGUuY29t",
    "email": "placeholder",
    "location": "Remote",
    "linkedin": "",
    "github": "https://github.com/joe",
    "website": ""
  },
  "experience": [],
  "education": [],
  "skills": { "frontend": [], "backend": ["Rust", "Go"], "tools": [] },
  "projects": []
}"#;

pub const BAD_ENCODED_EMAIL_JSON: &str = r#"{
  "profile": {
    "name": "Joe Doe",
    "encoded_email": "%%% not base64 %%%",
    "email": "placeholder"
  },
  "experience": [],
  "education": [],
  "skills": { "frontend": [], "backend": [], "tools": [] },
  "projects": []
}"#;

pub const MISSING_SKILLS_JSON: &str = r#"{
  "profile": { "name": "Ann Lee", "email": "ann@example.com" },
  "experience": [],
  "education": [],
  "projects": []
}"#;
