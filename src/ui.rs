use crate::models::{Debate, Idea};

pub const CONTACT_NOTICE: &str = "Thanks! This is a demo site — messages not sent (no backend).";

/// Escapes the five characters with markup meaning. Every user-supplied
/// field passes through here before landing in a fragment; this is the
/// only injection-safety mechanism in the system.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// One card per idea, first `max` records in storage order. The like and
/// view buttons carry `data-id` intents for the page dispatcher; liked
/// state comes from the like-set.
pub fn render_idea_cards(ideas: &[Idea], like_set: &[String], max: usize, card_class: &str) -> String {
    let mut out = String::new();
    for idea in ideas.iter().take(max) {
        let id = escape_html(&idea.id);
        let liked = like_set.iter().any(|entry| entry == &idea.id);
        let category = if idea.category.trim().is_empty() {
            "General"
        } else {
            idea.category.as_str()
        };
        out.push_str(&format!(
            concat!(
                "<article class=\"{card_class}\" data-id=\"{id}\">\n",
                "  <h3>{title}</h3>\n",
                "  <p class=\"muted\">{desc}</p>\n",
                "  <div class=\"card-foot\">\n",
                "    <span class=\"badge\">{category}</span>\n",
                "    <div class=\"card-actions\">\n",
                "      <button class=\"btn btn-light like-btn{liked_class}\" data-id=\"{id}\" aria-pressed=\"{liked}\">\n",
                "        <svg width=\"16\" height=\"16\" viewBox=\"0 0 24 24\" aria-hidden=\"true\"><path fill=\"currentColor\" d=\"M12 21s-8-6.7-8-11.2C4 6.1 6.6 4 9.2 4c1.7 0 2.8 1 2.8 1s1.1-1 2.8-1C17.4 4 20 6.1 20 9.8 20 14.3 12 21 12 21z\"/></svg>\n",
                "        <span class=\"likes-count\">{likes}</span>\n",
                "      </button>\n",
                "      <button class=\"btn btn-ghost view-btn\" data-id=\"{id}\">View</button>\n",
                "    </div>\n",
                "  </div>\n",
                "</article>\n",
            ),
            card_class = escape_html(card_class),
            id = id,
            title = escape_html(&idea.title),
            desc = escape_html(&idea.desc),
            category = escape_html(category),
            liked_class = if liked { " liked" } else { "" },
            liked = liked,
            likes = idea.likes,
        ));
    }
    out
}

pub fn render_debate_cards(debates: &[Debate]) -> String {
    let mut out = String::new();
    for debate in debates {
        out.push_str(&format!(
            concat!(
                "<article class=\"card\" data-id=\"{id}\">\n",
                "  <h3>{title}</h3>\n",
                "  <p class=\"muted\">{body}</p>\n",
                "  <div class=\"muted-2\">{upvotes} upvotes • {comments} comments</div>\n",
                "</article>\n",
            ),
            id = escape_html(&debate.id),
            title = escape_html(&debate.title),
            body = escape_html(&debate.body),
            upvotes = debate.upvotes,
            comments = debate.comments.len(),
        ));
    }
    out
}

/// Maps the `?toast=` query codes the form fallbacks redirect with to
/// their user-visible messages. Unknown codes show nothing.
pub fn toast_message(code: &str) -> Option<&'static str> {
    match code {
        "idea-submitted" => Some("Idea submitted!"),
        "idea-invalid" => Some(crate::forms::IDEA_VALIDATION_MESSAGE),
        "debate-created" => Some("Debate created!"),
        "debate-invalid" => Some(crate::forms::DEBATE_VALIDATION_MESSAGE),
        "contact-demo" => Some(CONTACT_NOTICE),
        _ => None,
    }
}

pub fn render_home(ideas: &[Idea], like_set: &[String], toast: Option<&str>) -> String {
    let body = format!(
        concat!(
            "<section class=\"hero\">\n",
            "  <h1>Kidii</h1>\n",
            "  <p class=\"muted\">Ideas and debates from young makers.</p>\n",
            "</section>\n",
            "<section>\n",
            "  <h2>Featured ideas</h2>\n",
            "  <div id=\"featuredIdeas\" class=\"card-grid\" data-fragment=\"/fragments/ideas?max=3&amp;card=card\">\n{cards}</div>\n",
            "</section>\n",
        ),
        cards = render_idea_cards(ideas, like_set, 3, "card"),
    );
    page("Home", &body, toast)
}

pub fn render_ideas_page(ideas: &[Idea], like_set: &[String], toast: Option<&str>) -> String {
    let body = format!(
        concat!(
            "<section>\n",
            "  <h2>All ideas</h2>\n",
            "  <div id=\"ideasList\" class=\"card-grid\" data-fragment=\"/fragments/ideas?max=500&amp;card=idea-card\">\n{cards}</div>\n",
            "</section>\n",
        ),
        cards = render_idea_cards(ideas, like_set, 500, "idea-card"),
    );
    page("Ideas", &body, toast)
}

pub fn render_debates_page(debates: &[Debate], toast: Option<&str>) -> String {
    let body = format!(
        concat!(
            "<section>\n",
            "  <h2>Debates</h2>\n",
            "  <form id=\"debateForm\" method=\"post\" action=\"/debates\" data-api=\"/api/debates\" data-done=\"Debate created!\">\n",
            "    <input name=\"title\" placeholder=\"Debate title\" />\n",
            "    <textarea name=\"body\" rows=\"3\" placeholder=\"What should we discuss?\"></textarea>\n",
            "    <button class=\"btn\" type=\"submit\">Start debate</button>\n",
            "  </form>\n",
            "  <div id=\"debatesList\" class=\"card-grid\" data-fragment=\"/fragments/debates\">\n{cards}</div>\n",
            "</section>\n",
        ),
        cards = render_debate_cards(debates),
    );
    page("Debates", &body, toast)
}

pub fn render_submit_page(toast: Option<&str>) -> String {
    let body = concat!(
        "<section>\n",
        "  <h2>Submit an idea</h2>\n",
        "  <form id=\"ideaForm\" method=\"post\" action=\"/ideas\" data-api=\"/api/ideas\" data-done=\"Idea submitted!\">\n",
        "    <input name=\"title\" placeholder=\"Title\" />\n",
        "    <input name=\"category\" placeholder=\"Category (optional)\" />\n",
        "    <textarea name=\"description\" rows=\"4\" placeholder=\"Describe your idea\"></textarea>\n",
        "    <button class=\"btn\" type=\"submit\">Submit idea</button>\n",
        "  </form>\n",
        "</section>\n",
    );
    page("Submit", body, toast)
}

pub fn render_contact_page(toast: Option<&str>) -> String {
    let body = concat!(
        "<section>\n",
        "  <h2>Contact</h2>\n",
        "  <form id=\"contactForm\" method=\"post\" action=\"/contact\" data-api=\"/api/contact\" data-done=\"Thanks! This is a demo site — messages not sent (no backend).\">\n",
        "    <input name=\"name\" placeholder=\"Your name\" />\n",
        "    <input name=\"email\" placeholder=\"Email\" />\n",
        "    <textarea name=\"message\" rows=\"4\" placeholder=\"Message\"></textarea>\n",
        "    <button class=\"btn\" type=\"submit\">Send</button>\n",
        "  </form>\n",
        "</section>\n",
    );
    page("Contact", body, toast)
}

fn page(title: &str, body: &str, toast: Option<&str>) -> String {
    let toast_html = match toast {
        Some(message) => format!("<div class=\"toast show\">{}</div>", escape_html(message)),
        None => String::new(),
    };
    LAYOUT_HTML
        .replace("{{TITLE}}", &escape_html(title))
        .replace("{{BODY}}", body)
        .replace("{{TOAST}}", &toast_html)
}

const LAYOUT_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>{{TITLE}} | Kidii</title>
  <style>
    :root {
      --ink: #22303a;
      --accent: #ff6b4a;
      --muted: #68737c;
      --card: #ffffff;
      --shadow: 0 10px 30px rgba(34, 48, 58, 0.1);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      background: #f7f4ee;
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
    }

    .site-header {
      display: flex;
      align-items: center;
      gap: 18px;
      padding: 14px 22px;
      background: var(--card);
      box-shadow: var(--shadow);
    }

    .brand {
      margin-right: auto;
      font-size: 1.25rem;
      font-weight: 700;
      color: var(--accent);
      text-decoration: none;
    }

    #mainNav {
      display: flex;
      gap: 14px;
    }

    #mainNav a {
      color: var(--ink);
      text-decoration: none;
      font-weight: 600;
    }

    #mobileToggle {
      display: none;
      border: none;
      background: transparent;
      font-size: 1.3rem;
      cursor: pointer;
    }

    main {
      max-width: 960px;
      margin: 0 auto;
      padding: 26px 18px 64px;
    }

    .hero h1 {
      margin: 0 0 6px;
      font-size: 2.2rem;
    }

    .card-grid {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(260px, 1fr));
      gap: 16px;
    }

    .card,
    .idea-card {
      background: var(--card);
      border-radius: 14px;
      padding: 18px;
      box-shadow: var(--shadow);
    }

    .card h3,
    .idea-card h3 {
      margin: 0 0 8px;
    }

    .muted {
      color: var(--muted);
    }

    .muted-2 {
      color: var(--muted);
      font-size: 0.9rem;
      margin-top: 10px;
    }

    .badge {
      background: rgba(255, 107, 74, 0.12);
      color: var(--accent);
      border-radius: 999px;
      padding: 4px 10px;
      font-size: 0.8rem;
      font-weight: 600;
    }

    .card-foot {
      display: flex;
      justify-content: space-between;
      align-items: center;
      margin-top: 12px;
    }

    .card-actions {
      display: flex;
      gap: 8px;
      align-items: center;
    }

    .btn {
      display: inline-flex;
      align-items: center;
      gap: 6px;
      border: none;
      border-radius: 999px;
      padding: 8px 14px;
      font: inherit;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
    }

    .btn-light {
      background: rgba(34, 48, 58, 0.06);
      color: var(--ink);
    }

    .btn-ghost {
      background: transparent;
      color: var(--muted);
    }

    .like-btn.liked {
      color: var(--accent);
    }

    form {
      display: grid;
      gap: 10px;
      max-width: 520px;
      margin-bottom: 24px;
    }

    input,
    textarea {
      padding: 10px 12px;
      border: 1px solid #d8d4cc;
      border-radius: 10px;
      font: inherit;
    }

    .modal {
      position: fixed;
      inset: 0;
      display: none;
      place-items: center;
      padding: 18px;
      background: rgba(34, 48, 58, 0.5);
    }

    .modal.open {
      display: grid;
    }

    .modal-card {
      background: var(--card);
      border-radius: 16px;
      padding: 22px;
      width: 100%;
      max-width: 520px;
    }

    .toast {
      position: fixed;
      bottom: 20px;
      left: 50%;
      transform: translateX(-50%);
      background: var(--ink);
      color: white;
      padding: 10px 18px;
      border-radius: 999px;
      opacity: 0;
      pointer-events: none;
      transition: opacity 200ms ease;
    }

    .toast.show {
      opacity: 1;
    }

    .user-is-tabbing :focus {
      outline: 3px solid var(--accent);
    }

    @media (max-width: 640px) {
      #mobileToggle {
        display: block;
      }
      #mainNav {
        display: none;
        position: absolute;
        top: 56px;
        right: 14px;
        flex-direction: column;
        background: var(--card);
        border-radius: 12px;
        padding: 14px 18px;
        box-shadow: var(--shadow);
      }
      #mainNav.open {
        display: flex;
      }
    }
  </style>
</head>
<body>
  <header class="site-header">
    <a class="brand" href="/">Kidii</a>
    <button id="mobileToggle" aria-expanded="false" aria-label="Menu">&#9776;</button>
    <nav id="mainNav" aria-hidden="true">
      <a href="/">Home</a>
      <a href="/ideas">Ideas</a>
      <a href="/debates">Debates</a>
      <a href="/submit">Submit</a>
      <a href="/contact">Contact</a>
    </nav>
  </header>
  <main>
{{BODY}}
  </main>
  {{TOAST}}
  <script>
    (function () {
      var toggle = document.getElementById('mobileToggle');
      var nav = document.getElementById('mainNav');
      if (toggle && nav) {
        toggle.addEventListener('click', function () {
          var open = nav.classList.toggle('open');
          toggle.setAttribute('aria-expanded', String(open));
          nav.setAttribute('aria-hidden', String(!open));
        });
      }

      function showToast(message) {
        var t = document.querySelector('.toast');
        if (!t) {
          t = document.createElement('div');
          t.className = 'toast';
          document.body.appendChild(t);
        }
        t.textContent = message;
        t.classList.add('show');
        clearTimeout(t._timeout);
        t._timeout = setTimeout(function () { t.classList.remove('show'); }, 2300);
      }

      var seeded = document.querySelector('.toast.show');
      if (seeded) {
        setTimeout(function () { seeded.classList.remove('show'); }, 2300);
      }

      function refreshFragments() {
        document.querySelectorAll('[data-fragment]').forEach(function (container) {
          fetch(container.dataset.fragment)
            .then(function (res) { return res.ok ? res.text() : null; })
            .then(function (html) { if (html !== null) container.innerHTML = html; })
            .catch(function () {});
        });
      }

      function openIdeaModal(id) {
        fetch('/api/ideas/' + encodeURIComponent(id))
          .then(function (res) { return res.ok ? res.json() : null; })
          .then(function (idea) {
            if (!idea) return;
            var m = document.getElementById('ideaModal');
            if (!m) {
              m = document.createElement('div');
              m.id = 'ideaModal';
              m.className = 'modal';
              m.innerHTML = '<div class="modal-card" role="dialog" aria-modal="true" aria-labelledby="modalTitle" tabindex="-1">' +
                '<button class="btn btn-light" id="closeModal" aria-label="Close">Close</button>' +
                '<h2 id="modalTitle"></h2>' +
                '<p class="muted" id="modalDesc"></p>' +
                '<div id="modalMeta" class="muted-2"></div></div>';
              document.body.appendChild(m);
              m.addEventListener('click', function (ev) {
                if (ev.target === m) m.classList.remove('open');
              });
              m.querySelector('#closeModal').addEventListener('click', function () {
                m.classList.remove('open');
              });
            }
            m.querySelector('#modalTitle').textContent = idea.title;
            m.querySelector('#modalDesc').textContent = idea.desc;
            m.querySelector('#modalMeta').textContent =
              'Category: ' + (idea.category || 'General') + ' • Likes: ' + (idea.likes || 0);
            m.classList.add('open');
            setTimeout(function () { m.querySelector('.modal-card').focus(); }, 100);
          })
          .catch(function () {});
      }

      document.addEventListener('click', function (event) {
        var like = event.target.closest('.like-btn');
        if (like) {
          event.preventDefault();
          fetch('/api/ideas/' + encodeURIComponent(like.dataset.id) + '/like', { method: 'POST' })
            .then(function (res) { return res.ok ? res.json() : null; })
            .then(function (state) {
              if (!state) return;
              like.classList.toggle('liked', state.liked);
              like.setAttribute('aria-pressed', String(state.liked));
              var count = like.querySelector('.likes-count');
              if (count) count.textContent = state.likes;
            })
            .catch(function () {});
          return;
        }
        var view = event.target.closest('.view-btn');
        if (view) {
          event.preventDefault();
          openIdeaModal(view.dataset.id);
        }
      });

      document.querySelectorAll('form[data-api]').forEach(function (form) {
        form.addEventListener('submit', function (event) {
          event.preventDefault();
          var payload = {};
          new FormData(form).forEach(function (value, key) { payload[key] = value; });
          fetch(form.dataset.api, {
            method: 'POST',
            headers: { 'content-type': 'application/json' },
            body: JSON.stringify(payload)
          })
            .then(function (res) {
              if (res.ok) {
                form.reset();
                showToast(form.dataset.done || 'Saved');
                refreshFragments();
              } else {
                res.text().then(showToast);
              }
            })
            .catch(function () {});
        });
      });

      document.body.addEventListener('keyup', function (event) {
        if (event.key === 'Tab') document.documentElement.classList.add('user-is-tabbing');
      });
    })();
  </script>
</body>
</html>
"#;
