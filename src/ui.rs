use crate::i18n::strings;
use crate::models::{Category, DestructiveAction, Language, StatsResponse};
use crate::storage::LoadIssue;
use crate::tally::TallyStore;
use std::fmt::Write;

pub fn render_index(
    store: &TallyStore,
    stats: &StatsResponse,
    load_issue: Option<LoadIssue>,
) -> String {
    let language = store.language();
    let text = strings(language);
    let selected = store.selected_category();

    let mut category_buttons = String::new();
    for category in Category::ALL {
        let class = if category == selected { "chip active" } else { "chip" };
        let _ = write!(
            category_buttons,
            r#"<form method="post" action="/select/{key}"><button class="{class}">{label}</button></form>"#,
            key = category.key(),
            label = escape(text.category(category)),
        );
    }

    let mut language_buttons = String::new();
    for candidate in Language::ALL {
        let class = if candidate == language { "lang active" } else { "lang" };
        let _ = write!(
            language_buttons,
            r#"<form method="post" action="/language/{code}"><button class="{class}">{name}</button></form>"#,
            code = candidate.code(),
            name = candidate.name(),
        );
    }

    let mut totals_rows = String::new();
    for share in &stats.categories {
        let _ = write!(
            totals_rows,
            r#"<li><span class="name">{label}<small>{session}: {current}</small></span><span class="badge">{total}</span><span class="pct">{pct}%</span></li>"#,
            label = escape(text.category(share.category)),
            session = text.session,
            current = share.current,
            total = share.total,
            pct = share.percentage,
        );
    }

    let most_used = if stats.max_count > 0 {
        format!(
            r#"<div class="most-used"><span>{}</span><strong>{}</strong><span>{} {}</span></div>"#,
            text.most_used,
            escape(text.category(stats.most_used_category)),
            stats.max_count,
            text.times,
        )
    } else {
        String::new()
    };

    let notice = match load_issue {
        Some(_) => format!(r#"<div class="notice" role="alert">{}</div>"#, text.load_error),
        None => String::new(),
    };

    let best_day = stats
        .best_day_date
        .map(|date| format!("{} ({date})", stats.best_day_count))
        .unwrap_or_else(|| "-".to_string());

    INDEX_HTML
        .replace("{{LANG}}", language.code())
        .replace("{{DIR}}", if language.is_rtl() { "rtl" } else { "ltr" })
        .replace("{{TITLE}}", text.title)
        .replace("{{SUBTITLE}}", text.subtitle)
        .replace("{{NOTICE}}", &notice)
        .replace("{{SELECT_LABEL}}", text.select_category)
        .replace("{{CATEGORY_BUTTONS}}", &category_buttons)
        .replace("{{SELECTED_LABEL}}", &escape(text.category(selected)))
        .replace("{{CURRENT_LABEL}}", text.current_count)
        .replace("{{CURRENT}}", &store.current_count().to_string())
        .replace("{{COUNT_BUTTON}}", text.count_button)
        .replace("{{COUNT_HINT}}", text.count_hint)
        .replace("{{RESET_LABEL}}", text.reset_counter)
        .replace(
            "{{RESET_PROMPT}}",
            &escape(&DestructiveAction::ResetCurrent(selected).prompt(language)),
        )
        .replace("{{STATS_LABEL}}", text.statistics)
        .replace("{{TOTAL_ALL_LABEL}}", text.total_all)
        .replace("{{TOTAL_ALL}}", &stats.total_all.to_string())
        .replace("{{SESSION_LABEL}}", text.current_session)
        .replace("{{CURRENT_ALL}}", &stats.current_all.to_string())
        .replace("{{STREAK_LABEL}}", text.current_streak)
        .replace("{{STREAK}}", &stats.current_streak.to_string())
        .replace("{{LONGEST_LABEL}}", text.longest_streak)
        .replace("{{LONGEST}}", &stats.longest_streak.to_string())
        .replace("{{DAILY_LABEL}}", text.daily_average)
        .replace("{{DAILY}}", &stats.daily_average.to_string())
        .replace("{{WEEKLY_LABEL}}", text.weekly_average)
        .replace("{{WEEKLY}}", &stats.weekly_average.to_string())
        .replace("{{BEST_LABEL}}", text.best_day)
        .replace("{{BEST}}", &best_day)
        .replace("{{MOST_USED}}", &most_used)
        .replace("{{SAVED_LABEL}}", text.saved_totals)
        .replace("{{TOTALS_ROWS}}", &totals_rows)
        .replace("{{CLEAR_LABEL}}", text.clear_all)
        .replace("{{CLEAR_PROMPT}}", &escape(&DestructiveAction::ClearAll.prompt(language)))
        .replace("{{LANGUAGE_LABEL}}", text.language)
        .replace("{{LANGUAGE_BUTTONS}}", &language_buttons)
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="{{LANG}}" dir="{{DIR}}">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}}</title>
  <style>
    :root {
      --bg: #f0f4f8;
      --ink: #1f2d3a;
      --teal: #0a7e8c;
      --teal-dark: #0a5f5f;
      --danger: #c0392b;
      --card: #ffffff;
      --shadow: 0 12px 32px rgba(10, 95, 95, 0.14);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      background: var(--bg);
      color: var(--ink);
      font-family: "Segoe UI", "Noto Sans", "Noto Naskh Arabic", sans-serif;
    }

    header {
      background: var(--teal);
      color: #fff;
      text-align: center;
      padding: 28px 18px 24px;
      border-radius: 0 0 30px 30px;
    }

    header h1 {
      margin: 0;
      font-size: 1.9rem;
    }

    header p {
      margin: 6px 0 0;
      opacity: 0.85;
    }

    main {
      width: min(720px, 100%);
      margin: 0 auto;
      padding: 20px 16px 48px;
      display: grid;
      gap: 18px;
    }

    section {
      background: var(--card);
      border-radius: 20px;
      box-shadow: var(--shadow);
      padding: 20px;
    }

    h2 {
      margin: 0 0 12px;
      font-size: 1.1rem;
    }

    form {
      display: inline;
      margin: 0;
    }

    button {
      font: inherit;
      cursor: pointer;
      border: none;
    }

    .chips {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    .chip,
    .lang {
      background: #e3eef0;
      color: var(--teal-dark);
      border-radius: 999px;
      padding: 8px 14px;
    }

    .chip.active,
    .lang.active {
      background: var(--teal);
      color: #fff;
    }

    .counter {
      text-align: center;
    }

    .counter .dhikr {
      font-size: 1.4rem;
      margin: 0 0 8px;
    }

    .counter .value {
      font-size: 4rem;
      font-weight: 700;
      color: var(--teal-dark);
    }

    .count-button {
      width: 180px;
      height: 180px;
      border-radius: 50%;
      background: var(--teal);
      color: #fff;
      font-size: 1.6rem;
      box-shadow: var(--shadow);
      display: grid;
      place-content: center;
      margin: 12px auto;
    }

    .count-button small {
      font-size: 0.85rem;
      opacity: 0.8;
    }

    .reset {
      background: #fdf1e6;
      color: #b3541e;
      border-radius: 12px;
      padding: 10px 16px;
    }

    .grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(140px, 1fr));
      gap: 12px;
    }

    .stat {
      background: #f5fafb;
      border-radius: 14px;
      padding: 14px;
      text-align: center;
    }

    .stat strong {
      display: block;
      font-size: 1.6rem;
      color: var(--teal-dark);
    }

    .most-used {
      margin-top: 14px;
      display: grid;
      gap: 4px;
      text-align: center;
      background: #fff8e1;
      border-radius: 14px;
      padding: 14px;
    }

    ul {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      gap: 10px;
    }

    li {
      display: flex;
      align-items: center;
      gap: 10px;
    }

    li .name {
      flex: 1;
      display: grid;
    }

    li small {
      opacity: 0.7;
    }

    .badge {
      background: var(--teal);
      color: #fff;
      border-radius: 10px;
      padding: 4px 10px;
    }

    .notice {
      background: #fdecea;
      color: var(--danger);
      border-radius: 14px;
      padding: 12px 16px;
      text-align: center;
    }

    .clear {
      width: 100%;
      background: var(--danger);
      color: #fff;
      border-radius: 14px;
      padding: 14px;
    }
  </style>
</head>
<body>
  <header>
    <h1>{{TITLE}}</h1>
    <p>{{SUBTITLE}}</p>
  </header>
  <main>
    {{NOTICE}}
    <section>
      <h2>{{SELECT_LABEL}}</h2>
      <div class="chips">{{CATEGORY_BUTTONS}}</div>
    </section>

    <section class="counter">
      <p class="dhikr">{{SELECTED_LABEL}}</p>
      <div>{{CURRENT_LABEL}}</div>
      <div class="value" id="current">{{CURRENT}}</div>
      <form method="post" action="/count">
        <button class="count-button">{{COUNT_BUTTON}}<small>{{COUNT_HINT}}</small></button>
      </form>
      <form method="post" action="/reset" data-prompt="{{RESET_PROMPT}}" onsubmit="return confirm(this.dataset.prompt)">
        <input type="hidden" name="confirmed" value="true" />
        <button class="reset">{{RESET_LABEL}}</button>
      </form>
    </section>

    <section>
      <h2>{{STATS_LABEL}}</h2>
      <div class="grid">
        <div class="stat"><strong>{{TOTAL_ALL}}</strong>{{TOTAL_ALL_LABEL}}</div>
        <div class="stat"><strong>{{CURRENT_ALL}}</strong>{{SESSION_LABEL}}</div>
        <div class="stat"><strong>{{STREAK}}</strong>{{STREAK_LABEL}}</div>
        <div class="stat"><strong>{{LONGEST}}</strong>{{LONGEST_LABEL}}</div>
        <div class="stat"><strong>{{DAILY}}</strong>{{DAILY_LABEL}}</div>
        <div class="stat"><strong>{{WEEKLY}}</strong>{{WEEKLY_LABEL}}</div>
        <div class="stat"><strong>{{BEST}}</strong>{{BEST_LABEL}}</div>
      </div>
      {{MOST_USED}}
    </section>

    <section>
      <h2>{{SAVED_LABEL}}</h2>
      <ul>{{TOTALS_ROWS}}</ul>
    </section>

    <section>
      <h2>{{LANGUAGE_LABEL}}</h2>
      <div class="chips">{{LANGUAGE_BUTTONS}}</div>
    </section>

    <form method="post" action="/clear" data-prompt="{{CLEAR_PROMPT}}" onsubmit="return confirm(this.dataset.prompt)">
      <input type="hidden" name="confirmed" value="true" />
      <button class="clear">{{CLEAR_LABEL}}</button>
    </form>
  </main>
</body>
</html>
"#;
