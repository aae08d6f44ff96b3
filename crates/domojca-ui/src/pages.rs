//! Page bodies, one function per [`PageView`](domojca_core::PageView).

use domojca_core::content::{
    latest_sermons, ministries, service_times, upcoming_events, Event, Sermon, ADDRESS_LINES,
    BANK_ACCOUNT, OFFICE_HOURS,
};
use domojca_core::PageView;

use crate::icons::{icon_svg, Icon};
use crate::view::{escape_html, ViewContext};

fn event_card(event: &Event) -> String {
    let image = event
        .image
        .as_deref()
        .map(|src| format!(r#"<img src="{}" alt="" loading="lazy">"#, escape_html(src)))
        .unwrap_or_default();
    format!(
        r#"<article class="card event">{image}<h3>{title}</h3><div class="meta"><span>{cal} {date}</span><span>{pin} {location}</span></div><p>{description}</p></article>"#,
        image = image,
        title = escape_html(&event.title),
        cal = icon_svg(Icon::Calendar),
        date = escape_html(&event.date),
        pin = icon_svg(Icon::MapPin),
        location = escape_html(&event.location),
        description = escape_html(&event.description),
    )
}

fn sermon_card(sermon: &Sermon) -> String {
    let href = sermon.video_url.as_deref().unwrap_or("#");
    format!(
        r#"<article class="card sermon"><a href="{href}" class="ministry-icon">{play}</a><h3>{title}</h3><div class="meta"><span>{speaker}</span><span>{date}</span><span>{clock} {duration}</span></div></article>"#,
        href = escape_html(href),
        play = icon_svg(Icon::Play),
        title = escape_html(&sermon.title),
        speaker = escape_html(&sermon.speaker),
        date = escape_html(&sermon.date),
        clock = icon_svg(Icon::Clock),
        duration = escape_html(&sermon.duration),
    )
}

pub fn home(ctx: &ViewContext) -> String {
    let t = &ctx.text().home;

    let times: String = service_times(ctx.language)
        .iter()
        .map(|s| {
            format!(
                r#"<div class="card"><div>{}</div><div class="time">{}</div><div>{}</div></div>"#,
                escape_html(&s.day),
                escape_html(&s.time),
                escape_html(&s.description)
            )
        })
        .collect();

    let ministry_cards: String = ministries(ctx.language)
        .iter()
        .map(|m| {
            format!(
                r#"<div class="card"><div class="ministry-icon">{}</div><h3>{}</h3><p>{}</p></div>"#,
                icon_svg(m.icon.into()),
                escape_html(&m.title),
                escape_html(&m.description)
            )
        })
        .collect();

    let sermons: String = latest_sermons(ctx.language).iter().map(sermon_card).collect();
    let events: String = upcoming_events(ctx.language).iter().map(event_card).collect();

    format!(
        r#"<section class="hero"><div class="container">
<h1>{hero_title}</h1>
<p>{hero_subtitle}</p>
<a class="button" href="{contact}">{join_us}</a>
</div></section>
<section class="page"><div class="container">
<h2>{times_title}</h2>
<div class="service-times">{times}</div>
</div></section>
<section class="page"><div class="container">
<h2>{ministries_title}</h2>
<div class="grid">{ministry_cards}</div>
</div></section>
<section class="page"><div class="container">
<h2>{sermons_title}</h2>
<div class="grid">{sermons}</div>
<p><a href="{sermons_href}">{see_all}</a></p>
</div></section>
<section class="page"><div class="container">
<h2>{events_title}</h2>
<div class="grid">{events}</div>
<p><a href="{events_href}">{see_all}</a></p>
</div></section>"#,
        hero_title = escape_html(t.hero_title),
        hero_subtitle = escape_html(t.hero_subtitle),
        contact = ctx.href(PageView::Contact),
        join_us = escape_html(t.join_us),
        times_title = escape_html(t.service_times_title),
        times = times,
        ministries_title = escape_html(t.ministries_title),
        ministry_cards = ministry_cards,
        sermons_title = escape_html(t.latest_sermons),
        sermons = sermons,
        sermons_href = ctx.href(PageView::Sermons),
        see_all = escape_html(t.see_all),
        events_title = escape_html(t.upcoming_events),
        events = events,
        events_href = ctx.href(PageView::Events),
    )
}

pub fn about(ctx: &ViewContext) -> String {
    let t = &ctx.text().about;
    format!(
        r#"<section class="page"><div class="container">
<h1>{title}</h1>
<p>{description}</p>
<div class="grid">
<div class="card"><h2>{vision_title}</h2><p>{vision_desc}</p></div>
<div class="card"><h2>{leaders_title}</h2><p>{leaders_desc}</p></div>
</div>
</div></section>"#,
        title = escape_html(t.title),
        description = escape_html(t.description),
        vision_title = escape_html(t.vision_title),
        vision_desc = escape_html(t.vision_desc),
        leaders_title = escape_html(t.leaders_title),
        leaders_desc = escape_html(t.leaders_desc),
    )
}

pub fn sermons(ctx: &ViewContext) -> String {
    let t = &ctx.text().sermons;
    let cards: String = latest_sermons(ctx.language).iter().map(sermon_card).collect();
    format!(
        r#"<section class="page"><div class="container">
<h1>{title}</h1>
<p class="subtitle">{sub_title}</p>
<div class="grid">{cards}</div>
</div></section>"#,
        title = escape_html(t.main_title),
        sub_title = escape_html(t.sub_title),
        cards = cards,
    )
}

pub fn events(ctx: &ViewContext) -> String {
    let t = &ctx.text().events;
    let cards: String = upcoming_events(ctx.language).iter().map(event_card).collect();
    format!(
        r#"<section class="page"><div class="container">
<h1>{title}</h1>
<p class="subtitle">{sub_title}</p>
<div class="grid">{cards}</div>
</div></section>"#,
        title = escape_html(t.title),
        sub_title = escape_html(t.sub_title),
        cards = cards,
    )
}

pub fn contact(ctx: &ViewContext) -> String {
    let t = &ctx.text().contact;
    format!(
        r#"<section class="page"><div class="container">
<h1>{title}</h1>
<p class="subtitle">{sub_title}</p>
<div class="contact-layout">
<div class="card">
<h3>{pin} {address}</h3><p>{street}<br>{city}</p>
<h3>{clock} {office}</h3><p>{hours}: {office_hours}</p>
</div>
<form class="card contact-form" id="contact-form" novalidate>
<label for="contact-name">{name_label}</label>
<input id="contact-name" name="name" type="text" placeholder="{name_placeholder}" autocomplete="name">
<label for="contact-email">{email_label}</label>
<input id="contact-email" name="email" type="email" placeholder="{email_placeholder}" autocomplete="email">
<label for="contact-message">{message_label}</label>
<textarea id="contact-message" name="message" placeholder="{message_placeholder}"></textarea>
<button class="button" type="submit" data-sending="{sending}">{mail} {send}</button>
<div class="form-status" role="status"></div>
</form>
</div>
</div></section>"#,
        title = escape_html(t.title),
        sub_title = escape_html(t.sub_title),
        pin = icon_svg(Icon::MapPin),
        address = escape_html(t.address),
        street = escape_html(ADDRESS_LINES[0]),
        city = escape_html(ADDRESS_LINES[1]),
        clock = icon_svg(Icon::Clock),
        office = escape_html(t.office),
        hours = escape_html(t.hours),
        office_hours = OFFICE_HOURS,
        name_label = escape_html(t.name_label),
        name_placeholder = escape_html(t.name_placeholder),
        email_label = escape_html(t.email_label),
        email_placeholder = escape_html(t.email_placeholder),
        message_label = escape_html(t.message_label),
        message_placeholder = escape_html(t.message_placeholder),
        sending = escape_html(t.form_sending),
        mail = icon_svg(Icon::Mail),
        send = escape_html(t.send_button),
    )
}

pub fn donation(ctx: &ViewContext) -> String {
    let t = &ctx.text().donation;
    format!(
        r#"<section class="page"><div class="container">
<h1>{title}</h1>
<p class="subtitle">{subtitle}</p>
<p>{description}</p>
<blockquote class="verse">{verse}</blockquote>
<div class="grid">
<div class="card">
<h2>{heart} {bank_transfer}</h2>
<p><strong>{account_number}</strong></p>
<div class="account-row"><span class="account-number">{number}</span><button class="copy-button" type="button" data-copy="{number_attr}" data-copied="{copied}">{copy_icon} {copy}</button></div>
<p><strong>{account_name}</strong><br>{name}</p>
<p><strong>{purpose}</strong><br>{purpose_text}</p>
</div>
<div class="card">
<h2>{online_payment} <span class="badge">{soon}</span></h2>
<p>{online_payment_desc}</p>
<p><em>{online_payment_soon}</em></p>
</div>
</div>
<p><strong>{thank_you}</strong></p>
</div></section>"#,
        title = escape_html(t.title),
        subtitle = escape_html(t.subtitle),
        description = escape_html(t.description),
        verse = escape_html(t.verse),
        heart = icon_svg(Icon::HandHeart),
        bank_transfer = escape_html(t.bank_transfer),
        account_number = escape_html(t.account_number),
        number = escape_html(BANK_ACCOUNT.number),
        number_attr = escape_html(&BANK_ACCOUNT.number.replace(' ', "")),
        copied = escape_html(t.copied),
        copy_icon = icon_svg(Icon::Copy),
        copy = escape_html(t.copy),
        account_name = escape_html(t.account_name),
        name = escape_html(BANK_ACCOUNT.name),
        purpose = escape_html(t.purpose),
        purpose_text = escape_html(BANK_ACCOUNT.purpose),
        online_payment = escape_html(t.online_payment),
        soon = escape_html(t.soon),
        online_payment_desc = escape_html(t.online_payment_desc),
        online_payment_soon = escape_html(t.online_payment_soon),
        thank_you = escape_html(t.thank_you),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use domojca_core::{translations, Language, Theme};

    fn ctx(page: PageView, language: Language) -> ViewContext {
        ViewContext::new(page, language, Theme::Light)
    }

    #[test]
    fn test_home_lists_ministries_with_icons() {
        let html = home(&ctx(PageView::Home, Language::En));
        for ministry in ministries(Language::En) {
            assert!(html.contains(&escape_html(&ministry.title)));
        }
        assert!(html.contains("class=\"ministry-icon\"><svg"));
        assert!(html.contains("11:00"));
    }

    #[test]
    fn test_events_page_is_localized() {
        let html = events(&ctx(PageView::Events, Language::Ua));
        for event in upcoming_events(Language::Ua) {
            assert!(html.contains(&escape_html(&event.title)));
        }
        assert!(html.contains(translations(Language::Ua).events.title));
    }

    #[test]
    fn test_sermons_page_lists_all_sermons() {
        let html = sermons(&ctx(PageView::Sermons, Language::Ru));
        assert_eq!(html.matches("class=\"card sermon\"").count(), 3);
    }

    #[test]
    fn test_contact_form_fields() {
        let html = contact(&ctx(PageView::Contact, Language::Pl));
        assert!(html.contains("id=\"contact-form\""));
        assert!(html.contains("name=\"name\""));
        assert!(html.contains("name=\"email\""));
        assert!(html.contains("name=\"message\""));
        assert!(html.contains("Wyślij wiadomość"));
        assert!(html.contains(OFFICE_HOURS));
    }

    #[test]
    fn test_donation_has_copyable_account_number() {
        let html = donation(&ctx(PageView::Donation, Language::En));
        assert!(html.contains(BANK_ACCOUNT.number));
        assert!(html.contains("data-copy=\"96253000082056105652830001\""));
        assert!(html.contains("data-copied=\"Copied\""));
    }

    #[test]
    fn test_about_page() {
        let html = about(&ctx(PageView::About, Language::Be));
        assert!(html.contains(translations(Language::Be).about.vision_title));
    }

    #[test]
    fn test_event_titles_with_quotes_are_escaped() {
        let html = events(&ctx(PageView::Events, Language::En));
        assert!(html.contains("Men&#39;s Conference &#39;Courage&#39;"));
    }
}
