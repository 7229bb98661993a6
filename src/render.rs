//! Renders a [`Line`] into an HTML representation, coalescing runs of cells
//! that share identical attributes into a single styled `<span>`.

use crate::attrs::Attrs;
use crate::line::Line;

/// Render `line` as a sequence of `<span style="...">` runs, one per maximal
/// run of cells sharing identical [`Attrs`]. O(cols).
pub fn render_line(line: &Line) -> String {
    let mut out = String::from("<div>");
    let mut run = String::new();
    let mut run_attrs: Option<&Attrs> = None;

    for cell in line.cells() {
        match run_attrs {
            Some(a) if *a == cell.attrs => run.push(cell.ch),
            _ => {
                if let Some(a) = run_attrs {
                    out.push_str(&render_span(&run, a));
                }
                run.clear();
                run.push(cell.ch);
                run_attrs = Some(&cell.attrs);
            }
        }
    }
    if let Some(a) = run_attrs {
        out.push_str(&render_span(&run, a));
    }
    out.push_str("</div>");
    out
}

fn render_span(text: &str, attrs: &Attrs) -> String {
    let (fg, bg) = attrs.effective_colors();

    let mut style = format!("color:{fg};background-color:{bg};");
    if attrs.bold {
        style.push_str("font-weight:bold;");
    }
    if attrs.dim {
        style.push_str("opacity:0.67;");
    }
    if attrs.italic {
        style.push_str("font-style:italic;");
    }
    if attrs.superscript {
        style.push_str("vertical-align:super;font-size:smaller;");
    }
    if attrs.subscript {
        style.push_str("vertical-align:sub;font-size:smaller;");
    }

    let mut decorations = Vec::new();
    if attrs.underline {
        decorations.push("underline");
    }
    if attrs.crossed {
        decorations.push("line-through");
    }
    if attrs.overline {
        decorations.push("overline");
    }
    if !decorations.is_empty() {
        style.push_str("text-decoration:");
        style.push_str(&decorations.join(" "));
        style.push(';');
    }

    format!(r#"<span style="{style}">{}</span>"#, escape_html(text))
}

fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            ' ' => out.push_str("&nbsp;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::Palette;

    #[test]
    fn adjacent_equal_attrs_collapse_into_one_span() {
        let attrs = Attrs::new(&Palette::default());
        let mut line = Line::new(0, 5, &attrs);
        for (i, c) in "abcde".chars().enumerate() {
            line.write(i as i32 + 1, c, attrs.clone());
        }
        let html = render_line(&line);
        assert_eq!(html.matches("<span").count(), 1);
        assert!(html.contains("abcde"));
    }

    #[test]
    fn differing_attrs_split_into_separate_spans() {
        let base = Attrs::new(&Palette::default());
        let mut bold = base.clone();
        bold.bold = true;

        let mut line = Line::new(0, 3, &base);
        line.write(1, 'a', base.clone());
        line.write(2, 'b', bold);
        line.write(3, 'c', base);
        let html = render_line(&line);
        assert_eq!(html.matches("<span").count(), 3);
    }

    #[test]
    fn escapes_html_special_characters() {
        let attrs = Attrs::new(&Palette::default());
        let mut line = Line::new(0, 3, &attrs);
        line.write(1, '<', attrs.clone());
        line.write(2, '&', attrs.clone());
        line.write(3, '>', attrs);
        let html = render_line(&line);
        assert!(html.contains("&lt;&amp;&gt;"));
    }

    #[test]
    fn reverse_swaps_rendered_colors() {
        let mut attrs = Attrs::new(&Palette::default());
        attrs.reverse = true;
        let mut line = Line::new(0, 1, &attrs);
        line.write(1, 'x', attrs.clone());
        let html = render_line(&line);
        let (fg, bg) = attrs.effective_colors();
        assert!(html.contains(&format!("color:{fg}")));
        assert!(html.contains(&format!("background-color:{bg}")));
    }
}
