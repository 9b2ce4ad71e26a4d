//! Fixed, ordered list of catalog categories.
//!
//! Each entry pairs the exact heading text searched for in the source document
//! with the CSV file its projects are written to. Adding a category means
//! adding a row here.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategorySpec {
    /// Value written to the `category` column.
    pub key: &'static str,
    /// Literal heading, matched by plain substring search.
    pub heading: &'static str,
    pub filename: &'static str,
}

const fn category(key: &'static str, heading: &'static str, filename: &'static str) -> CategorySpec {
    CategorySpec {
        key,
        heading,
        filename,
    }
}

pub const CATEGORIES: &[CategorySpec] = &[
    category(
        "browser_automation",
        "### 📂 <a name=\"browser-automation\"></a>브라우저 자동화",
        "projects_browser_automation.csv",
    ),
    category(
        "art_and_culture",
        "### 🎨 <a name=\"art-and-culture\"></a>예술 및 문화",
        "projects_art_and_culture.csv",
    ),
    category(
        "cloud_platforms",
        "### ☁️ <a name=\"cloud-platforms\"></a>클라우드 플랫폼",
        "projects_cloud_platforms.csv",
    ),
    category(
        "command_line",
        "### 🖥️ <a name=\"command-line\"></a>커맨드 라인",
        "projects_command_line.csv",
    ),
    category(
        "communication",
        "### 💬 <a name=\"communication\"></a>커뮤니케이션",
        "projects_communication.csv",
    ),
    category(
        "customer_data_platforms",
        "### 👤 <a name=\"customer-data-platforms\"></a>고객 데이터 플랫폼",
        "projects_customer_data_platforms.csv",
    ),
    category(
        "data_platforms",
        "### 📊 <a name=\"data-platforms\"></a>데이터 플랫폼",
        "projects_data_platforms.csv",
    ),
    category(
        "databases",
        "### 🗄️ <a name=\"databases\"></a>데이터베이스",
        "projects_databases.csv",
    ),
    category(
        "developer_tools",
        "### 💻 <a name=\"developer-tools\"></a>개발자 도구",
        "projects_developer_tools.csv",
    ),
    category(
        "data_science_tools",
        "### 🧮 데이터 과학 도구",
        "projects_data_science_tools.csv",
    ),
    category(
        "file_systems",
        "### 📂 <a name=\"file-systems\"></a>파일 시스템",
        "projects_file_systems.csv",
    ),
    category(
        "finance_fintech",
        "### 💰 <a name=\"finance--fintech\"></a>금융 및 핀테크",
        "projects_finance_fintech.csv",
    ),
    category(
        "gaming",
        "### 🎮 <a name=\"gaming\"></a>게임",
        "projects_gaming.csv",
    ),
    category(
        "knowledge_memory",
        "### 🧠 <a name=\"knowledge--memory\"></a>지식 및 메모리",
        "projects_knowledge_memory.csv",
    ),
    category(
        "location_services",
        "### 🗺️ <a name=\"location-services\"></a>위치 서비스",
        "projects_location_services.csv",
    ),
    category(
        "marketing",
        "### 🎯 <a name=\"marketing\"></a>마케팅",
        "projects_marketing.csv",
    ),
    category(
        "monitoring",
        "### 📊 <a name=\"monitoring\"></a>모니터링",
        "projects_monitoring.csv",
    ),
    category(
        "search",
        "### 🔎 <a name=\"search\"></a>검색",
        "projects_search.csv",
    ),
    category(
        "security",
        "### 🔒 <a name=\"security\"></a>보안",
        "projects_security.csv",
    ),
    category(
        "sports",
        "### 🏃 <a name=\"sports\"></a>스포츠",
        "projects_sports.csv",
    ),
    category(
        "translation_services",
        "### 🌎 <a name=\"translation-services\"></a>번역 서비스",
        "projects_translation_services.csv",
    ),
    category(
        "travel_and_transportation",
        "### 🚆 <a name=\"travel-and-transportation\"></a>여행 및 교통",
        "projects_travel_and_transportation.csv",
    ),
    category(
        "version_control",
        "### 🔄 <a name=\"version-control\"></a>버전 관리",
        "projects_version_control.csv",
    ),
    category(
        "other_tools_and_integrations",
        "### 🛠️ <a name=\"other-tools-and-integrations\"></a>기타 도구 및 통합",
        "projects_other_tools_and_integrations.csv",
    ),
];
