//! Static educational content for the guide's views.
//!
//! Everything here is `'static` data; frontends decide how to lay it out.

use serde::Serialize;

use crate::draft::DraftField;

/// The four views of the guide.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    #[default]
    Home,
    Fundamentals,
    Builder,
    Techniques,
}

impl Page {
    /// All pages in navigation order.
    pub const ALL: [Page; 4] = [
        Page::Home,
        Page::Fundamentals,
        Page::Builder,
        Page::Techniques,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Home => "Prompt Engineering Guide",
            Self::Fundamentals => "Fundamentals",
            Self::Builder => "Interactive Builder",
            Self::Techniques => "Advanced Techniques",
        }
    }

    /// Key that navigates to this page.
    pub fn key(self) -> char {
        match self {
            Self::Home => '1',
            Self::Fundamentals => '2',
            Self::Builder => '3',
            Self::Techniques => '4',
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Self::Home => "Start here: what prompt engineering is and how this guide works.",
            Self::Fundamentals => "The four building blocks of an effective prompt.",
            Self::Builder => "Assemble your own prompt from task, context, examples, and format.",
            Self::Techniques => "Patterns that get better answers: few-shot, chain-of-thought, and more.",
        }
    }

    /// Page bound to a navigation key, if any.
    pub fn from_key(key: char) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.key() == key)
    }

    /// Parse a page name as typed on the command line.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "home" => Some(Self::Home),
            "fundamentals" => Some(Self::Fundamentals),
            "builder" => Some(Self::Builder),
            "techniques" => Some(Self::Techniques),
            _ => None,
        }
    }
}

/// A feature card on the home view.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Highlight {
    pub title: &'static str,
    pub body: &'static str,
    /// Page the card links to.
    pub page: Page,
}

/// One building block of a prompt, tied to the builder field that holds it.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Fundamental {
    pub field: DraftField,
    pub title: &'static str,
    pub description: &'static str,
    pub example: &'static str,
}

/// A named prompting technique.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Technique {
    pub name: &'static str,
    pub summary: &'static str,
    pub when_to_use: &'static str,
    pub example: &'static str,
}

/// Intro paragraph on the home view.
pub const HOME_INTRO: &str = "Prompt engineering is the practice of writing instructions \
that help AI models understand exactly what you want. A well-structured prompt states the \
task, supplies the context, shows the style you expect, and says how the answer should be \
shaped.";

pub fn home_highlights() -> &'static [Highlight] {
    &[
        Highlight {
            title: "Learn the Fundamentals",
            body: "Understand the four components every strong prompt is built from.",
            page: Page::Fundamentals,
        },
        Highlight {
            title: "Build Interactively",
            body: "Fill in each component and watch your prompt come together.",
            page: Page::Builder,
        },
        Highlight {
            title: "Master Techniques",
            body: "Go further with few-shot examples, step-by-step reasoning, and roles.",
            page: Page::Techniques,
        },
    ]
}

pub fn fundamentals() -> &'static [Fundamental] {
    &[
        Fundamental {
            field: DraftField::Task,
            title: "Clear Task",
            description: "Start with a specific action verb. Say exactly what you want produced.",
            example: "Write a product description",
        },
        Fundamental {
            field: DraftField::Context,
            title: "Relevant Context",
            description: "Give the background, audience, and constraints the model cannot guess.",
            example: "for an eco-friendly water bottle aimed at hikers",
        },
        Fundamental {
            field: DraftField::Examples,
            title: "Examples & Style",
            description: "Show or describe the tone and style you expect in the answer.",
            example: "in an energetic tone similar to outdoor gear brands",
        },
        Fundamental {
            field: DraftField::Format,
            title: "Output Format",
            description: "Specify length and structure so the answer is ready to use.",
            example: "3 short paragraphs followed by 5 bullet-point features",
        },
    ]
}

pub fn techniques() -> &'static [Technique] {
    &[
        Technique {
            name: "Zero-Shot Prompting",
            summary: "Ask directly with no examples and rely on the model's general knowledge.",
            when_to_use: "Simple, well-known tasks where the expected output is obvious.",
            example: "Classify the sentiment of this review as positive, negative, or neutral.",
        },
        Technique {
            name: "Few-Shot Prompting",
            summary: "Include a handful of input/output pairs so the model copies the pattern.",
            when_to_use: "Custom formats, labels, or styles the model would not guess.",
            example: "Great service! -> positive\nCold food. -> negative\nIt was okay. -> ?",
        },
        Technique {
            name: "Chain-of-Thought",
            summary: "Ask the model to reason step by step before giving its final answer.",
            when_to_use: "Math, logic, and multi-step problems where shortcuts cause errors.",
            example: "Solve this problem step by step, then state the final answer on its own line.",
        },
        Technique {
            name: "Role Prompting",
            summary: "Assign an expert persona to steer vocabulary, depth, and perspective.",
            when_to_use: "Domain-specific advice or when a particular voice matters.",
            example: "You are a senior security engineer. Review this login flow for weaknesses.",
        },
        Technique {
            name: "Structured Output",
            summary: "Name the exact structure of the answer, such as JSON, a table, or headings.",
            when_to_use: "When the output is parsed by a program or pasted into a document.",
            example: "Return a JSON object with keys \"title\", \"summary\", and \"tags\".",
        },
        Technique {
            name: "Iterative Refinement",
            summary: "Treat the first answer as a draft and follow up with targeted corrections.",
            when_to_use: "Open-ended writing where quality improves with feedback.",
            example: "Good start. Make the second paragraph more concise and add a call to action.",
        },
    ]
}

/// Plain-text rendering of a page, used by the headless CLI.
pub fn page_text(page: Page) -> String {
    let mut out = format!("{}\n\n{}\n", page.title(), page.summary());
    match page {
        Page::Home => {
            out.push_str(&format!("\n{HOME_INTRO}\n"));
            for h in home_highlights() {
                out.push_str(&format!(
                    "\n[{}] {}\n    {}\n",
                    h.page.key(),
                    h.title,
                    h.body
                ));
            }
        }
        Page::Fundamentals => {
            for (i, f) in fundamentals().iter().enumerate() {
                out.push_str(&format!(
                    "\n{}. {}\n   {}\n   Example: \"{}\"\n",
                    i + 1,
                    f.title,
                    f.description,
                    f.example
                ));
            }
        }
        Page::Builder => {
            for field in DraftField::ALL {
                out.push_str(&format!("\n{}: {}\n", field.label(), field.hint()));
            }
        }
        Page::Techniques => {
            for t in techniques() {
                out.push_str(&format!(
                    "\n{}\n  {}\n  When to use: {}\n  Example: {}\n",
                    t.name, t.summary, t.when_to_use, t.example
                ));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_keys_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_key(page.key()), Some(page));
        }
        assert_eq!(Page::from_key('9'), None);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Page::parse("Builder"), Some(Page::Builder));
        assert_eq!(Page::parse("TECHNIQUES"), Some(Page::Techniques));
        assert_eq!(Page::parse("settings"), None);
    }

    #[test]
    fn fundamentals_cover_every_field_in_order() {
        let fields: Vec<DraftField> = fundamentals().iter().map(|f| f.field).collect();
        assert_eq!(fields, DraftField::ALL.to_vec());
    }

    #[test]
    fn highlights_link_to_other_pages() {
        assert!(home_highlights().iter().all(|h| h.page != Page::Home));
    }

    #[test]
    fn page_text_includes_content() {
        let text = page_text(Page::Techniques);
        assert!(text.starts_with("Advanced Techniques"));
        assert!(text.contains("Chain-of-Thought"));

        let text = page_text(Page::Fundamentals);
        assert!(text.contains("1. Clear Task"));
    }
}
