use crate::core::skills::Insight;
use web_sys as web;

/// Build the insight card list under `#insight-list`, one card per insight,
/// tagged with its kind so the page styles gap/strength/growth/
/// recommendation differently. No-op if the container is absent.
pub fn render_into(document: &web::Document, insights: &[Insight]) {
    let Some(list) = document.get_element_by_id("insight-list") else {
        return;
    };
    list.set_text_content(None);
    for insight in insights {
        let Ok(card) = document.create_element("div") else {
            continue;
        };
        card.set_class_name(&format!("insight-card insight-{}", insight.kind.label()));

        if let Ok(kind) = document.create_element("span") {
            kind.set_class_name("insight-kind");
            kind.set_text_content(Some(insight.kind.label()));
            _ = card.append_child(&kind);
        }
        if let Ok(title) = document.create_element("h4") {
            title.set_text_content(Some(insight.title));
            _ = card.append_child(&title);
        }
        if let Ok(description) = document.create_element("p") {
            description.set_text_content(Some(insight.description));
            _ = card.append_child(&description);
        }
        _ = list.append_child(&card);
    }
}
