//! Traditional Chinese prompt catalog for paper summaries

use super::{PromptTemplate, TemplateError};
use crate::domain::document::{SectionKind, SummaryRequest};

/// Content budget for a single section prompt, in characters
pub const SECTION_BUDGET_CHARS: usize = 3000;
/// Budget for the combined section summaries in the overall prompt
pub const OVERALL_BUDGET_CHARS: usize = 6000;
/// Budget for the overall summary fed into each insight prompt
pub const INSIGHT_BUDGET_CHARS: usize = 3000;
/// Budget for raw document content in a single-shot summary
pub const REQUEST_BUDGET_CHARS: usize = 4000;

const ABSTRACT_INSTRUCTIONS: &str = "請將以下 Abstract 內容以繁體中文摘要，強調：
- 研究動機
- 主要研究問題
- 方法概述
- 主要發現與貢獻
摘要應簡明扼要，適合學術讀者快速掌握論文核心。";

const INTRODUCTION_INSTRUCTIONS: &str = "請將以下 Introduction 內容以繁體中文摘要，強調：
- 研究背景與動機
- 相關領域現況
- 研究目的與重要性
- 主要貢獻
摘要應清楚說明本研究的定位與價值。";

const METHOD_INSTRUCTIONS: &str = "請將以下 Method 內容以繁體中文摘要，強調：
- 研究設計與架構
- 主要方法或技術
- 實驗流程或數據來源
- 與現有方法的差異
摘要應讓讀者能快速理解本研究的技術核心。";

const RESULTS_INSTRUCTIONS: &str = "請將以下 Results 內容以繁體中文摘要，強調：
- 主要實驗結果
- 數據或指標
- 與預期或基線的比較
- 重要發現
摘要應聚焦於最具代表性的成果。";

const CONCLUSION_INSTRUCTIONS: &str = "請將以下 Conclusion 內容以繁體中文摘要，強調：
- 研究結論
- 主要貢獻與意義
- 研究限制
- 未來展望
摘要應協助讀者掌握本研究的總結與後續方向。";

const FALLBACK_INSTRUCTIONS: &str =
    "請將以下章節內容以繁體中文摘要，重點整理章節核心內容，適合學術背景讀者。";

const SECTION_TEMPLATE: &str = "${var:instructions}

${var:title-line:}章節：${var:section}
內容：
${var:content}";

const OVERALL_TEMPLATE: &str = "請根據下列各章節的繁體中文摘要，彙整出一份完整的論文總結，強調研究動機、方法、主要發現與貢獻，適合學術背景讀者。

${var:title-line:}章節摘要彙整如下：
${var:summaries}";

const TAKE_AWAY_TEMPLATE: &str = "以下是論文的總體摘要內容，請從中整理出五個最重要的重點：

摘要內容：
${var:summary}

請以繁體中文條列方式回答：
1.
2.
3.
4.
5.";

const IDEAS_TEMPLATE: &str = "你是一位具備研究與創新能力的AI助手，請根據下列論文摘要，提出可能的應用方向或後續研究發展。

摘要內容：
${var:summary}

請以繁體中文條列方式提供：
1.
2.
3.";

const REQUEST_TEMPLATE: &str = "請為以下學術論文提供一個簡潔的中文摘要。

${var:title-line:}請重點關注：${var:focus-areas}

論文內容：
${var:content}

請以以下格式提供摘要：
這篇論文探討了...主要貢獻包括：
1. [第一個貢獻]
2. [第二個貢獻]
3. [第三個貢獻]

摘要應該：
- 用繁體中文撰寫
- 突出主要方法和發現
- 保持簡潔但信息豐富
- 適合學術背景的讀者";

/// Instruction text for a section kind; `Other` takes the generic fallback
pub fn section_instructions(kind: SectionKind) -> &'static str {
    match kind {
        SectionKind::Abstract => ABSTRACT_INSTRUCTIONS,
        SectionKind::Introduction => INTRODUCTION_INSTRUCTIONS,
        SectionKind::Method => METHOD_INSTRUCTIONS,
        SectionKind::Results => RESULTS_INSTRUCTIONS,
        SectionKind::Conclusion => CONCLUSION_INSTRUCTIONS,
        SectionKind::Other => FALLBACK_INSTRUCTIONS,
    }
}

/// Longest prefix of `text` holding at most `max_chars` characters
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}

fn title_line(paper_title: Option<&str>) -> String {
    match paper_title {
        Some(title) if !title.is_empty() => format!("論文標題：{}\n\n", title),
        _ => String::new(),
    }
}

/// The set of templates used to build every summary prompt
#[derive(Debug, Clone)]
pub struct PromptCatalog {
    section: PromptTemplate,
    overall: PromptTemplate,
    take_away: PromptTemplate,
    ideas: PromptTemplate,
    request: PromptTemplate,
}

impl PromptCatalog {
    pub fn new() -> Result<Self, TemplateError> {
        Ok(Self {
            section: PromptTemplate::parse(SECTION_TEMPLATE)?,
            overall: PromptTemplate::parse(OVERALL_TEMPLATE)?,
            take_away: PromptTemplate::parse(TAKE_AWAY_TEMPLATE)?,
            ideas: PromptTemplate::parse(IDEAS_TEMPLATE)?,
            request: PromptTemplate::parse(REQUEST_TEMPLATE)?,
        })
    }

    /// Replace the per-section template
    pub fn with_section_template(mut self, template: PromptTemplate) -> Self {
        self.section = template;
        self
    }

    /// Prompt for one section, content capped to the section budget
    pub fn section_prompt(
        &self,
        kind: SectionKind,
        section_name: &str,
        paper_title: Option<&str>,
        content: &str,
    ) -> Result<String, TemplateError> {
        self.section.render_pairs(&[
            ("instructions", section_instructions(kind)),
            ("title-line", &title_line(paper_title)),
            ("section", section_name),
            ("content", truncate_chars(content, SECTION_BUDGET_CHARS)),
        ])
    }

    /// Prompt combining section summaries into one overall summary
    pub fn overall_prompt(
        &self,
        paper_title: Option<&str>,
        combined_summaries: &str,
    ) -> Result<String, TemplateError> {
        self.overall.render_pairs(&[
            ("title-line", &title_line(paper_title)),
            (
                "summaries",
                truncate_chars(combined_summaries, OVERALL_BUDGET_CHARS),
            ),
        ])
    }

    /// Prompt asking for the five most important points
    pub fn take_away_prompt(&self, overall_summary: &str) -> Result<String, TemplateError> {
        self.take_away.render_pairs(&[(
            "summary",
            truncate_chars(overall_summary, INSIGHT_BUDGET_CHARS),
        )])
    }

    /// Prompt asking for application and follow-up research ideas
    pub fn ideas_prompt(&self, overall_summary: &str) -> Result<String, TemplateError> {
        self.ideas.render_pairs(&[(
            "summary",
            truncate_chars(overall_summary, INSIGHT_BUDGET_CHARS),
        )])
    }

    /// Single-shot prompt over raw document content
    pub fn request_prompt(&self, request: &SummaryRequest) -> Result<String, TemplateError> {
        self.request.render_pairs(&[
            ("title-line", &title_line(request.title.as_deref())),
            ("focus-areas", &request.focus_areas.join("、")),
            (
                "content",
                truncate_chars(&request.document_content, REQUEST_BUDGET_CHARS),
            ),
        ])
    }
}
