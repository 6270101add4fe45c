use ammonia::clean_text;

use crate::{
    entities::image::StoredImage,
    use_cases::gallery::ViewMode,
    utils::file_size::format_file_size,
};

/// Everything the HTML view needs.
pub struct GalleryView<'a> {
    pub images: Vec<&'a StoredImage>,
    pub total: usize,
    pub search_term: &'a str,
    pub view_mode: ViewMode,
    pub notice: Option<&'a str>,
}

const STYLE: &str = "\
body{font-family:system-ui,sans-serif;margin:0;padding:1.5rem;background:#f5f5f5}\
.toolbar{display:flex;gap:.75rem;align-items:center;margin-bottom:1rem}\
.notice{background:#fde2e2;padding:.75rem;border-radius:6px;margin-bottom:1rem}\
.grid{display:grid;gap:1rem;grid-template-columns:repeat(1,1fr)}\
@media(min-width:640px){.grid{grid-template-columns:repeat(2,1fr)}}\
@media(min-width:960px){.grid{grid-template-columns:repeat(3,1fr)}}\
@media(min-width:1280px){.grid{grid-template-columns:repeat(4,1fr)}}\
.card{background:#fff;border-radius:8px;overflow:hidden;box-shadow:0 1px 3px #0002}\
.card img{width:100%;height:12rem;object-fit:cover}\
.card .meta{padding:.5rem .75rem;font-size:.85rem}\
table{width:100%;border-collapse:collapse;background:#fff}\
td,th{padding:.5rem;border-bottom:1px solid #eee;text-align:left}\
td img{width:3rem;height:3rem;object-fit:cover}";

pub fn render_gallery_page(view: &GalleryView<'_>) -> String {
    let search = clean_text(view.search_term);
    let search_param = urlencoding::encode(view.search_term);
    let other_mode = view.view_mode.toggled();

    let mut html = String::with_capacity(4096);
    html.push_str("<!DOCTYPE html><html lang=\"en\"><head><meta charset=\"utf-8\">");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">");
    html.push_str("<title>Image Gallery</title><style>");
    html.push_str(STYLE);
    html.push_str("</style></head><body><h1>Image Gallery</h1>");

    html.push_str(&format!(
        "<form class=\"toolbar\" method=\"get\" action=\"/\">\
         <input type=\"search\" name=\"q\" value=\"{search}\" placeholder=\"Search images...\">\
         <input type=\"hidden\" name=\"view\" value=\"{mode}\">\
         <button type=\"submit\">Search</button>\
         <a href=\"/?q={search_param}&amp;view={other}\">{other_label} view</a>\
         <span>{shown} of {total} images</span></form>",
        mode = view.view_mode.as_str(),
        other = other_mode.as_str(),
        other_label = match other_mode {
            ViewMode::Grid => "Grid",
            ViewMode::List => "List",
        },
        shown = view.images.len(),
        total = view.total,
    ));

    if let Some(notice) = view.notice {
        html.push_str(&format!("<div class=\"notice\">{}</div>", clean_text(notice)));
    }

    if view.images.is_empty() {
        html.push_str("<p>No images found.</p>");
    } else {
        match view.view_mode {
            ViewMode::Grid => render_grid(&mut html, &view.images),
            ViewMode::List => render_list(&mut html, &view.images),
        }
    }

    html.push_str("</body></html>");
    html
}

fn size_label(image: &StoredImage) -> String {
    image
        .bytes
        .map(format_file_size)
        .unwrap_or_else(|| "Unknown".to_string())
}

fn render_grid(html: &mut String, images: &[&StoredImage]) {
    html.push_str("<div class=\"grid\">");
    for image in images {
        let url = clean_text(&image.url);
        let name = clean_text(&image.original_name);
        html.push_str(&format!(
            "<div class=\"card\" id=\"{id}\"><a href=\"{url}\"><img src=\"{url}\" alt=\"{name}\" loading=\"lazy\"></a>\
             <div class=\"meta\"><strong>{name}</strong><br>{dims} · {format} · {size}<br>\
             <small>{uploaded}</small></div></div>",
            id = clean_text(&image.public_id),
            dims = clean_text(&image.dimensions_label()),
            format = clean_text(&image.format_label()),
            size = size_label(image),
            uploaded = image.uploaded_at.format("%Y-%m-%d %H:%M"),
        ));
    }
    html.push_str("</div>");
}

fn render_list(html: &mut String, images: &[&StoredImage]) {
    html.push_str(
        "<table><thead><tr><th></th><th>Name</th><th>Dimensions</th>\
         <th>Format</th><th>Size</th><th>Uploaded</th></tr></thead><tbody>",
    );
    for image in images {
        let url = clean_text(&image.url);
        html.push_str(&format!(
            "<tr id=\"{id}\"><td><img src=\"{url}\" alt=\"\" loading=\"lazy\"></td>\
             <td><a href=\"{url}\">{name}</a></td><td>{dims}</td><td>{format}</td>\
             <td>{size}</td><td>{uploaded}</td></tr>",
            id = clean_text(&image.public_id),
            name = clean_text(&image.original_name),
            dims = clean_text(&image.dimensions_label()),
            format = clean_text(&image.format_label()),
            size = size_label(image),
            uploaded = image.uploaded_at.format("%Y-%m-%d %H:%M"),
        ));
    }
    html.push_str("</tbody></table>");
}
