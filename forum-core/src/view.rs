/// Экранирует `& < > " '` для вставки в HTML.
///
/// Вызывается только из [`View::render_to_string`]: текстовые узлы и значения
/// атрибутов экранируются всегда, вызывающий код передаёт сырые строки.
pub fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Узел дерева представления.
pub enum View {
    /// Элемент.
    Element(Element),
    /// Текст.
    Text(String),
    /// Несколько узлов без обёртки.
    Fragment(Vec<View>),
    /// Ничего.
    Empty,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// HTML-элемент: тег, атрибуты и дочерние узлы.
pub struct Element {
    tag: &'static str,
    attrs: Vec<(&'static str, String)>,
    children: Vec<View>,
}

impl Element {
    /// Новый элемент без атрибутов и детей.
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Добавляет атрибут.
    pub fn attr(mut self, name: &'static str, value: impl ToString) -> Self {
        self.attrs.push((name, value.to_string()));
        self
    }

    /// Добавляет атрибут `class`.
    pub fn class(self, value: &'static str) -> Self {
        self.attr("class", value)
    }

    /// Добавляет дочерний узел.
    pub fn child(mut self, child: impl Into<View>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Добавляет текстовый дочерний узел.
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(View::Text(text.into()))
    }

    /// Добавляет несколько дочерних узлов.
    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<View>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    /// Тег элемента.
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Значение атрибута, если он задан.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(attr, _)| *attr == name)
            .map(|(_, value)| value.as_str())
    }
}

impl From<Element> for View {
    fn from(element: Element) -> Self {
        View::Element(element)
    }
}

impl View {
    /// Рендерит дерево в HTML-строку.
    pub fn render_to_string(&self) -> String {
        let mut output = String::new();
        self.render_into(&mut output);
        output
    }

    fn render_into(&self, output: &mut String) {
        match self {
            View::Element(el) => {
                output.push('<');
                output.push_str(el.tag);

                for (name, value) in &el.attrs {
                    output.push(' ');
                    output.push_str(name);
                    output.push_str("=\"");
                    output.push_str(&escape_html(value));
                    output.push('"');
                }

                output.push('>');
                for child in &el.children {
                    child.render_into(output);
                }
                output.push_str("</");
                output.push_str(el.tag);
                output.push('>');
            }
            View::Text(text) => output.push_str(&escape_html(text)),
            View::Fragment(children) => {
                for child in children {
                    child.render_into(output);
                }
            }
            View::Empty => {}
        }
    }

    /// Обходит все элементы дерева в порядке документа.
    pub fn elements(&self) -> Vec<&Element> {
        let mut found = Vec::new();
        self.collect_elements(&mut found);
        found
    }

    fn collect_elements<'a>(&'a self, found: &mut Vec<&'a Element>) {
        match self {
            View::Element(el) => {
                found.push(el);
                for child in &el.children {
                    child.collect_elements(found);
                }
            }
            View::Fragment(children) => {
                for child in children {
                    child.collect_elements(found);
                }
            }
            View::Text(_) | View::Empty => {}
        }
    }
}
