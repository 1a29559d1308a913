use tracing::trace;

use crate::form::NormalizationForm;
use crate::normalizer::Normalizer;

/// двунаправленный итератор по нормализованной строке
///
/// исходная строка делится на отрезки, начинающиеся с границы нормализации (см.
/// [`Normalizer::has_boundary_before`]), каждый отрезок нормализуется отдельно при переходе к нему.
/// позиции в исходной строке - индексы символов. `None` означает достижение конца (или начала) строки,
/// после чего итерация в противоположном направлении продолжается как обычно
#[derive(Debug, Clone)]
pub struct NormalizingIterator<'a>
{
    normalizer: Normalizer<'a>,
    /// исходная строка
    text: Vec<char>,
    /// нормализованный текущий отрезок
    buffer: Vec<char>,
    /// позиция в нормализованном отрезке
    buffer_pos: usize,
    /// начало текущего отрезка в исходной строке
    current_index: usize,
    /// конец текущего отрезка в исходной строке
    next_index: usize,
}

impl<'a> NormalizingIterator<'a>
{
    pub fn new(normalizer: Normalizer<'a>, text: &str) -> Self
    {
        Self {
            normalizer,
            text: text.chars().collect(),
            buffer: Vec::new(),
            buffer_pos: 0,
            current_index: 0,
            next_index: 0,
        }
    }

    /// заменить исходную строку, итерация начинается с начала
    pub fn set_text(&mut self, text: &str)
    {
        self.text = text.chars().collect();
        self.reset();
    }

    pub fn form(&self) -> NormalizationForm
    {
        self.normalizer.form()
    }

    /// сменить форму нормализации. итерация продолжается с текущей позиции в исходной строке
    pub fn set_form(&mut self, form: NormalizationForm)
    {
        let index = self.index();

        self.normalizer.set_form(form);
        self.set_index_only(index);
    }

    /// первый символ нормализованной строки
    pub fn first(&mut self) -> Option<char>
    {
        self.reset();
        self.next()
    }

    /// последний символ нормализованной строки
    pub fn last(&mut self) -> Option<char>
    {
        self.set_index_only(self.text.len());
        self.previous()
    }

    /// следующий символ нормализованной строки
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<char>
    {
        if self.buffer_pos < self.buffer.len() || self.next_normalize() {
            let c = self.buffer[self.buffer_pos];
            self.buffer_pos += 1;

            return Some(c);
        }

        None
    }

    /// предыдущий символ нормализованной строки
    pub fn previous(&mut self) -> Option<char>
    {
        if self.buffer_pos > 0 || self.previous_normalize() {
            self.buffer_pos -= 1;
            return Some(self.buffer[self.buffer_pos]);
        }

        None
    }

    /// текущий символ без перемещения
    pub fn current(&mut self) -> Option<char>
    {
        if self.buffer_pos < self.buffer.len() || self.next_normalize() {
            return Some(self.buffer[self.buffer_pos]);
        }

        None
    }

    /// позиция в исходной строке: начало текущего отрезка, если он не пройден до конца,
    /// иначе - начало следующего
    pub fn index(&self) -> usize
    {
        match self.buffer_pos < self.buffer.len() {
            true => self.current_index,
            false => self.next_index,
        }
    }

    /// перейти к позиции в исходной строке. позиция за концом строки заменяется концом строки
    pub fn set_index_only(&mut self, index: usize)
    {
        let index = index.min(self.text.len());

        self.current_index = index;
        self.next_index = index;
        self.clear_buffer();
    }

    /// вернуться к началу строки
    pub fn reset(&mut self)
    {
        self.set_index_only(0);
    }

    fn clear_buffer(&mut self)
    {
        self.buffer.clear();
        self.buffer_pos = 0;
    }

    /// нормализовать отрезок, начинающийся с next_index
    fn next_normalize(&mut self) -> bool
    {
        self.clear_buffer();
        self.current_index = self.next_index;

        if self.current_index >= self.text.len() {
            return false;
        }

        let end = self.text[self.current_index + 1 ..]
            .iter()
            .position(|&c| self.normalizer.has_boundary_before(c))
            .map_or(self.text.len(), |i| self.current_index + 1 + i);

        self.next_index = end;
        self.normalize_segment();

        !self.buffer.is_empty()
    }

    /// нормализовать отрезок, заканчивающийся на current_index
    fn previous_normalize(&mut self) -> bool
    {
        self.clear_buffer();
        self.next_index = self.current_index;

        let mut start = self.current_index;

        while start > 0 {
            start -= 1;

            if self.normalizer.has_boundary_before(self.text[start]) {
                break;
            }
        }

        self.current_index = start;
        self.normalize_segment();
        self.buffer_pos = self.buffer.len();

        !self.buffer.is_empty()
    }

    fn normalize_segment(&mut self)
    {
        let segment = &self.text[self.current_index .. self.next_index];

        self.buffer = self.normalizer.normalize_chars(segment.iter().copied());

        trace!(
            target: "normalizing_iterator",
            form = %self.normalizer.form(),
            start = self.current_index,
            end = self.next_index,
            normalized = self.buffer.len(),
            "segment normalized"
        );
    }
}
