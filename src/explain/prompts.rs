// SPDX-License-Identifier: PMPL-1.0-or-later

//! Prompt templates and fallback strings, one per supported language.

use crate::i18n::Lang;
use crate::types::DictionaryEntry;

/// Build the explanation prompt for `entry` in `lang`.
pub fn build_prompt(entry: &DictionaryEntry, lang: Lang) -> String {
    let code = entry.code.as_str();
    let meaning = entry.meaning.as_str();
    match lang {
        Lang::Es => format!(
            r#"Explica el origen o la lógica para descifrar el siguiente código juvenil: "{code}".

El significado conocido es: "{meaning}".

Por ejemplo, si es un acrónimo (como 'BRB' por 'Be Right Back') o si los números representan el conteo de letras (como '143' por 'I Love You').

Tu explicación debe ser breve, clara y centrarse únicamente en CÓMO el código representa el significado. No agregues consejos para padres ni información de contexto adicional.

Responde en español."#
        ),
        Lang::En => format!(
            r#"Explain the origin or logic for deciphering the following teen slang code: "{code}".

The known meaning is: "{meaning}".

For example, if it's an acronym (like 'BRB' for 'Be Right Back') or if the numbers represent letter counts (like '143' for 'I Love You').

Your explanation should be brief, clear, and focus solely on HOW the code represents the meaning. Do not add parental advice or extra context.

Respond in English."#
        ),
        Lang::Ka => format!(
            r#"ახსენი შემდეგი თინეიჯერული სლენგის კოდის წარმოშობა ან ლოგიკა: "{code}".

ცნობილი მნიშვნელობაა: "{meaning}".

მაგალითად, თუ ეს არის აკრონიმი (როგორიცაა 'BRB' - 'Be Right Back') ან თუ რიცხვები წარმოადგენს ასოების რაოდენობას (როგორიცაა '143' - 'I Love You').

შენი ახსნა უნდა იყოს მოკლე, გასაგები და ფოკუსირებული მხოლოდ იმაზე, თუ როგორ წარმოადგენს კოდი მის მნიშვნელობას. არ დაამატო რჩევები მშობლებისთვის ან დამატებითი კონტექსტი.

მიპასუხე ქართულად."#
        ),
    }
}

/// Fixed text shown in place of an explanation when the provider fails.
pub fn fallback_message(lang: Lang) -> &'static str {
    match lang {
        Lang::Es => "No se pudo obtener una explicación detallada en este momento. Por favor, inténtelo de nuevo más tarde.",
        Lang::En => "Could not get a detailed explanation at this time. Please try again later.",
        Lang::Ka => "ამჟამად დეტალური ახსნა-განმარტების მიღება ვერ ხერხდება. გთხოვთ, სცადოთ მოგვიანებით.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    fn rizz(lang: Lang, meaning: &str) -> DictionaryEntry {
        DictionaryEntry {
            id: 24,
            code: "Rizz".to_string(),
            category: Category::Harmless,
            meaning: meaning.to_string(),
            language: lang,
        }
    }

    #[test]
    fn prompts_embed_code_and_meaning() {
        let prompt = build_prompt(&rizz(Lang::En, "Charisma"), Lang::En);
        assert!(prompt.contains("\"Rizz\""));
        assert!(prompt.contains("\"Charisma\""));
        assert!(prompt.ends_with("Respond in English."));
    }

    #[test]
    fn each_language_has_its_own_template() {
        let entry = rizz(Lang::Es, "Carisma para ligar");
        let es = build_prompt(&entry, Lang::Es);
        let ka = build_prompt(&entry, Lang::Ka);
        assert!(es.ends_with("Responde en español."));
        assert!(ka.ends_with("მიპასუხე ქართულად."));
        assert!(ka.contains("\"Carisma para ligar\""));
    }

    #[test]
    fn fallbacks_differ_per_language() {
        let messages: Vec<_> = Lang::all().iter().map(|l| fallback_message(*l)).collect();
        assert_eq!(messages.len(), 3);
        assert_ne!(messages[0], messages[1]);
        assert_ne!(messages[1], messages[2]);
        assert!(fallback_message(Lang::En).starts_with("Could not get"));
    }
}
