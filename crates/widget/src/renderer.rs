//! View renderer: loads the data each view needs and turns it into markup.
//!
//! Loading and rendering are split so that a view is painted in one piece
//! only after every fetch it depends on has completed.

use futures_util::future::try_join_all;
use helpcenter_core::{
    Article, Category, ContentGateway, FetchError, HelpCenterApi, Section, SectionContext,
    TransitionRequest,
};

use crate::markup::{AffordanceKind, MarkupBuilder, Rendered};

/// A category with the sections listed under it on the home view.
#[derive(Debug, Clone)]
pub struct CategoryBlock {
    pub category: Category,
    pub sections: Vec<Section>,
}

#[derive(Debug, Clone)]
pub struct SectionPage {
    pub section: Section,
    pub articles: Vec<Article>,
}

/// Fetches all categories, then every category's sections concurrently.
///
/// Section requests are issued in category order and the blocks keep the
/// order the API returned the categories in.
pub async fn load_home(gateway: &dyn ContentGateway) -> Result<Vec<CategoryBlock>, FetchError> {
    let categories = gateway.categories().await?;
    let sections =
        try_join_all(categories.iter().map(|category| gateway.category_sections(category.id)))
            .await?;
    Ok(categories
        .into_iter()
        .zip(sections)
        .map(|(category, sections)| CategoryBlock { category, sections })
        .collect())
}

pub async fn load_section(
    gateway: &dyn ContentGateway,
    section_id: u64,
) -> Result<SectionPage, FetchError> {
    let (section, articles) =
        tokio::try_join!(gateway.section(section_id), gateway.section_articles(section_id))?;
    Ok(SectionPage { section, articles })
}

pub async fn load_article(gateway: &dyn ContentGateway, article_id: u64) -> Result<Article, FetchError> {
    gateway.article(article_id).await
}

pub fn render_home(render: u64, blocks: &[CategoryBlock]) -> Rendered {
    let mut m = MarkupBuilder::new(render);
    for block in blocks {
        let category = &block.category;
        m.push(&format!("<div class=\"category\" data-category-id=\"{}\">", category.id));
        m.push("<h2 class=\"category-title\">");
        m.text(&category.name);
        m.push("</h2><div class=\"section-list\">");
        for section in &block.sections {
            let attr = m.affordance(
                AffordanceKind::SectionItem,
                &section.name,
                TransitionRequest::Section {
                    section_id: section.id,
                    category_name: Some(category.name.clone()),
                },
            );
            m.push(&format!(
                "<div class=\"section-item\" {attr} data-section-id=\"{}\" data-category-id=\"{}\" data-category-name=\"",
                section.id, category.id
            ));
            m.text(&category.name);
            m.push("\"><h3>");
            m.text(&section.name);
            m.push("</h3><p>");
            m.text(section.description.as_deref().unwrap_or(""));
            m.push("</p></div>");
        }
        m.push("</div></div>");
    }
    m.finish()
}

pub fn render_section(render: u64, page: &SectionPage, category_name: Option<&str>) -> Rendered {
    let section = &page.section;
    let mut m = MarkupBuilder::new(render);

    let attr = m.affordance(AffordanceKind::BackButton, "← Back to Categories", TransitionRequest::Home);
    m.push(&format!("<a href=\"#\" class=\"back-button\" {attr}>← Back to Categories</a>"));

    let mut crumbs = vec![("Categories".to_owned(), Some(TransitionRequest::Home))];
    if let Some(name) = category_name {
        crumbs.push((name.to_owned(), None));
    }
    crumbs.push((section.name.clone(), None));
    m.breadcrumb(crumbs);

    m.push("<h2 class=\"category-title\">");
    m.text(&section.name);
    m.push("</h2><div class=\"article-list\">");
    for article in &page.articles {
        let attr = m.affordance(
            AffordanceKind::ArticleLink,
            &article.title,
            TransitionRequest::Article {
                article_id: article.id,
                section: Some(SectionContext {
                    section_id: section.id,
                    section_name: section.name.clone(),
                    category_name: category_name.map(str::to_owned),
                }),
            },
        );
        m.push(&format!(
            "<div class=\"article-item\"><a href=\"#\" class=\"article-link\" {attr} data-article-id=\"{}\">",
            article.id
        ));
        m.text(&article.title);
        m.push("</a></div>");
    }
    m.push("</div>");
    m.finish()
}

pub fn render_article(render: u64, article: &Article, section: Option<&SectionContext>) -> Rendered {
    let mut m = MarkupBuilder::new(render);

    match section {
        Some(ctx) => {
            let back = TransitionRequest::Section {
                section_id: ctx.section_id,
                category_name: ctx.category_name.clone(),
            };
            let attr = m.affordance(AffordanceKind::BackButton, "← Back to Section", back.clone());
            m.push(&format!(
                "<a href=\"#\" class=\"back-button\" {attr} data-section-id=\"{}\">← Back to Section</a>",
                ctx.section_id
            ));
            let mut crumbs = vec![("Categories".to_owned(), Some(TransitionRequest::Home))];
            if let Some(name) = &ctx.category_name {
                crumbs.push((name.clone(), Some(back.clone())));
            }
            crumbs.push((ctx.section_name.clone(), Some(back)));
            crumbs.push((article.title.clone(), None));
            m.breadcrumb(crumbs);
        },
        None => {
            let attr =
                m.affordance(AffordanceKind::BackButton, "← Back to Categories", TransitionRequest::Home);
            m.push(&format!("<a href=\"#\" class=\"back-button\" {attr}>← Back to Categories</a>"));
            m.breadcrumb(vec![
                ("Categories".to_owned(), Some(TransitionRequest::Home)),
                (article.title.clone(), None),
            ]);
        },
    }

    m.push("<h1 class=\"category-title\">");
    m.text(&article.title);
    m.push("</h1><div class=\"article-content\">");
    m.push(article.body.as_deref().unwrap_or(""));
    m.push("</div>");
    m.finish()
}

pub fn render_error(message: &str) -> Rendered {
    let mut m = MarkupBuilder::new(0);
    m.push("<div class=\"error\">");
    m.text(message);
    m.push(". Please try again later.</div>");
    m.finish()
}
