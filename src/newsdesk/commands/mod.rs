use crate::config::NewsdeskConfig;
use crate::model::Article;
use crate::render::Homepage;
use std::path::PathBuf;

pub mod config;
pub mod home;
pub mod list;
pub mod publish;
pub mod site;
pub mod view;

/// Where newsdesk keeps its files.
#[derive(Debug, Clone)]
pub struct NewsdeskPaths {
    pub data_dir: PathBuf,
}

impl NewsdeskPaths {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn config_dir(&self) -> PathBuf {
        self.data_dir.clone()
    }

    pub fn slots_dir(&self) -> PathBuf {
        self.data_dir.join("slots")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

/// A generated file, relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitePage {
    pub path: PathBuf,
    pub contents: String,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_articles: Vec<Article>,
    pub listed_articles: Vec<Article>,
    pub homepage: Option<Homepage>,
    pub fragment: Option<String>,
    pub pages: Vec<SitePage>,
    pub config: Option<NewsdeskConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected_articles(mut self, articles: Vec<Article>) -> Self {
        self.affected_articles = articles;
        self
    }

    pub fn with_listed_articles(mut self, articles: Vec<Article>) -> Self {
        self.listed_articles = articles;
        self
    }

    pub fn with_homepage(mut self, homepage: Homepage) -> Self {
        self.homepage = Some(homepage);
        self
    }

    pub fn with_fragment(mut self, html: String) -> Self {
        self.fragment = Some(html);
        self
    }

    pub fn with_pages(mut self, pages: Vec<SitePage>) -> Self {
        self.pages = pages;
        self
    }

    pub fn with_config(mut self, config: NewsdeskConfig) -> Self {
        self.config = Some(config);
        self
    }
}
