/// Static content served by the bot: welcome text, menu layout and practices.

/// Greeting shown above the practice menu.
pub const WELCOME_TEXT: &str = "Добро пожаловать в проект \"Зеркала\"! Наши психологи здесь делятся \
    практиками, которые помогают в жизни им самим. Почувствуй себя как дома и выбери тему для проработки:";

/// Reply to any text that is not a known command.
pub const UNKNOWN_COMMAND_TEXT: &str = "Команда не распознана. Введите /start для начала.";

/// Reply to a button whose callback data no longer matches anything.
pub const EXPIRED_BUTTON_TEXT: &str = "Эта кнопка больше не активна. Выберите тему из меню:";

/// Label of the single button under a practice.
pub const BACK_LABEL: &str = "Назад";

/// Callback data that brings the menu back.
pub const MENU_CALLBACK: &str = "menu";

/// Prefix of the callback data carried by practice buttons.
pub const PRACTICE_CALLBACK_PREFIX: &str = "practice_";

/// A self-help text with its menu button.
#[derive(Debug, PartialEq, Eq)]
pub struct Practice {
    pub id: &'static str,
    pub button_label: &'static str,
    /// Legacy Telegram Markdown.
    pub body: &'static str,
}

impl Practice {
    /// Callback data of the button opening this practice.
    pub fn callback_data(&self) -> String {
        format!("{PRACTICE_CALLBACK_PREFIX}{}", self.id)
    }
}

/// Button placement of the menu, by practice id.
pub const MENU_LAYOUT: &[&[&str]] = &[
    &["1"],
    &["2", "3"],
    &["4", "5"],
    &["6", "7"],
    &["8"],
];

/// Looks up a practice by id.
pub fn find(id: &str) -> Option<&'static Practice> {
    PRACTICES.iter().find(|p| p.id == id)
}

/// Resolves `practice_<id>` callback data to its practice.
pub fn find_by_callback(data: &str) -> Option<&'static Practice> {
    data.strip_prefix(PRACTICE_CALLBACK_PREFIX).and_then(find)
}

pub static PRACTICES: [Practice; 8] = [
    Practice {
        id: "1",
        button_label: "🧘‍♀️ Это всё я",
        body: "*Когда я замечаю, что теряю себя, смущаюсь или боюсь чьей-то реакции и из-за этого \
            становлюсь наигранной и напряженной, я напоминаю себе: я есть и этого достаточно.*\n\n\
            Мне помогает дыхательная техника Треугольник силы.\n\n\
            Я кладу одну ладонь на живот, а вторую на крестец и чувствую тепло между ними, в животе.\n\
            С выдохом я мысленно направляю это тепло в правую ногу и пускаю эту энергию по правой ноге \
            до самой земли и дальше, через ступню, под землю.\n\
            Под землей я направляю эту энергию в левую стопу и со вдохом представляю, как поднимаю ее \
            обратно, в живот.\n\
            Так, я дышу несколько кругов, заземляюсь и чувствую себя до тех пор, пока не пойму: я есть \
            и этого достаточно.\n\n\
            — _Эту практику создала Марта Куклина. Психолог, гештальттерапевт._\n\
            [Сайт для связи](https://kuklina.pro)",
    },
    Practice {
        id: "2",
        button_label: "🦸‍♂️ Сила больше боли",
        body: "*Когда у меня опускаются руки или что-то выбивает почву из-под ног – я напоминаю себе, \
            что уже многое смогла и многого достигла. Я вспоминаю о своей внутренней силе. Чтобы не \
            забывать о ней – я иногда возвращаюсь к этому упражнению.*\n\n\
            **Поиск и присвоение сил.**\n\n\
            *Шаг 1.*  \n\
            Я предлагаю тебе написать список ресурсов, начиная с самого раннего детства в контексте того, \
            что помогло выжить и помогает жить. Для этого надо повспоминать сложные периоды/ситуации из \
            жизни, от последних, настоящих до самого детства, и выписать ответ на вопрос:  \n\
            _Что мне тогда помогло, что мной двигало, благодаря каким своим способностям я выжила и \
            справилась?_  \n\
            Это могут быть и одобряемые вещи, и социально неодобряемые (обманул, изменила и пр.). В работе \
            делай акцент внутри себя на том, что какой бы ни был способ — \"главное, что я справилась\".  \n\
            В этом шаге выписывай без редактуры, даже если внутренний критик будет говорить \"тоже мне \
            таланты!\". Просто пиши всё, что помогло. Постарайся не меньше 20 пунктов.\n\n\
            *Шаг 2.*  \n\
            Подели список на внешние и внутренние ресурсы.  \n\
            _Внутренние:_ это «я сам/а» умею, сделал, поняла.  \n\
            _Внешние:_ \"повезло, помогли, совпало, хорошие друзья, добрые люди, удачный был день\".  \n\
            Внутренние – пока просто отложи в сторону. Внешние конвертируй во внутренние.  \n\
            Например: _мне помогли люди_ = _я умею попросить помощи у правильных людей_ ИЛИ _я умею \
            поддерживать отношения_.\n\n\
            *Шаг 3. Конвертация.*  \n\
            В этом шаге соедини внутренние и внешние, которые конвертировала во внутренние – это список \
            твоих внутренних сил. В нём поменяй те формулировки, которые тебе не нравятся, так, чтобы они \
            тебе нравились, чтобы ты с гордостью говорила это про себя. Меняй до тех пор, пока не будет \
            приятно говорить так о себе.\n\n\
            *Шаг 4.*  \n\
            У тебя есть список (обязательно его написать или напечатать в заметки/документ, не \"в уме\") \
            из твоих способностей, особенностей, навыков, талантов, которые тебе помогают в сложных \
            ситуациях. Все внутренние (начинаются с \"я\"/\"мне\"). Желательно, чтобы при его прочтении \
            \"выравнивалась спинка\".\n\n\
            *Шаг 5. Телесное закрепление.*  \n\
            Надиктуй этот список себе в аудио формате: прочитай все пункты в формулировке \"я умею...\" с \
            небольшой паузой после каждого пункта. Слушай эту запись во время упадка сил, обращай внимание \
            на телесные реакции во время прослушивания.\n\n\
            _ЗАДАЧА:_  \n\
            Закрепить телесное состояние от знания своих сил в самых маленьких ощущениях (\"накачать \
            попу\"). Чтобы когда оно наработается – уметь вызывать это состояние не мыслями, а ощущениями, \
            мышцами, дыханием. То есть, ты как бы выучиваешь \"асану\" и потом будешь не думать о себе \
            хорошее, а просто телом \"вставать\" в твою асану :)\n\n\
            **Сила внутри тебя.**\n\n\
            — _Эту практику создала Марта Куклина. Психолог, гештальттерапевт._  \n\
            Сайт для связи: [https://kuklina.pro](https://kuklina.pro)",
    },
    Practice {
        id: "3",
        button_label: "🌏 Я пришел жить вслух",
        body: "*Одно из самых больших разочарований в жизни - это прожить не свою жизнь. А что \
            останавливает человека выбирать свой собственный, настоящий, тот самый путь?*\n\n\
            Ниже предлагаю несколько фраз, которые могут помочь выйти из привычных паттернов.\n\n\
            Попробуйте начать рассуждения на тему **“Если бы я был посмелее, я бы тогда..”** и напишите \
            минимум 10 пунктов. Если захочется больше, не ограничивайте себя.\n\n\
            Далее новый список **“Если бы я себя любил, я бы…”** и тоже минимум 10 пунктов.\n\n\
            Ну и последнее **“Если бы мне было можно жить так, как мне хочется, я бы тогда…”**\n\n\
            *Эту практику создала Федорец Екатерина. Психолог, гештальт и логотерапевт.*  \n\
            Сайт для связи: [https://fedorets-psy.ru/](https://fedorets-psy.ru/)",
    },
    Practice {
        id: "4",
        button_label: "😟 Разговор с тревогой",
        body: "Описание практики 'Разговор с тревогой'...",
    },
    Practice {
        id: "5",
        button_label: "🌌 Мир уже состоит из твоих смыслов",
        body: "„Нет такой ситуации, в которой нам не была бы предоставлена жизнью возможность найти \
            смысл, и нет такого человека, для которого жизнь не держала бы наготове какое-нибудь дело. \
            Возможность осуществить смысл всегда уникальна, и человек, который может ее реализовать, \
            всегда неповторим“  \n\
            — Виктор Франкл - австрийский психиатр, психолог, философ и невролог, бывший узник нацистского \
            концентрационного лагеря.  \n\
            Автор мирового бестселлера «Сказать жизни „Да!“: Психолог в концлагере».\n\n\
            Если представить, что внутри тебя спрятан компас, который всегда показывает тебе направление \
            твоего предназначения и твоего смысла. Куда бы этот компас показал сейчас? В какой области был \
            твой “север”? Куда в течение всей жизни тебя тянет?\n\n\
            Эту практику создала Федорец Екатерина. Психолог, гештальт и логотерапевт.  \n\
            Сайт для связи: [https://fedorets-psy.ru/](https://fedorets-psy.ru/)",
    },
    Practice {
        id: "6",
        button_label: "🌱 Начни жить свою жизнь",
        body: "О чем чаще всего жалеют люди перед смертью?  \n\
            Бронни Вэр называют самой известной паллиативной медсестрой в мире. Она долгие годы работала \
            в хосписе и провела множество бесед с людьми, которым оставалось всего несколько дней. Она \
            заметила, что пациенты сожалеют о похожих вещах.  \n\
            И чаще всего люди жалеют о том, что им не хватило смелости жить так, как им хочется.\n\n\
            Все мы в той или иной степени зависим от мнения окружающих и хотим их одобрения. Но к \
            сожалению, это также приводит к тому, что люди отодвигают/замалчивают свои истинные желания, \
            чтобы быть хорошими/удобными для других. И в итоге проживают не свою жизнь.  \n\
            Страшно оказаться без поддержки, страшно, что тебя осудят, от тебя отвернуться, если ты \
            начнёшь поступать так, как тебе хочется.\n\n\
            Я тоже с этим сталкиваюсь и мне тоже бывает страшно что-то делать. Появляется ощущение, что \
            сейчас все резко обратят на меня внимание и начнут осуждать.  \n\
            Что делать?  \n\n\
            Важно помнить, что все люди заняты собой, своей жизнью, они большую часть времени думают как \
            и вы о себе. Им совершенно нет дела до вас.  \n\
            И даже если кто-то вас осуждает, вы не обязаны вести себя так, как им нравится.  \n\
            В моменты, когда вы хотите пожертвовать своими желаниями ради того, чтобы угодить другим, \
            задайте себе эти вопросы:  \n\n\
            Что я теряю, когда выбираю вместо себя желания другого человека?  \n\
            К чему это обычно приводит?  \n\
            Как долго я еще готов/а это делать?\n\n\
            Контакты:  \n\
            Екатерина Жемлаускас  \n\
            [Telegram](https://t.me/zhempsy)  \n\
            [Instagram](https://www.instagram.com/ekaterina_zhemlauskas)",
    },
    Practice {
        id: "7",
        button_label: "🧘‍♂️ Сравнивая себя, ты теряешь себя",
        body: "«Когда я смотрю на людей в своей сфере и начинаю себя сравнивать с ними - я впадаю в \
            уныние. Они слишком далеко от меня, у них все легко и естественно получается, наверное, со \
            мной что-то не так. Я какая-то не такая». Знакомо?  \n\n\
            Абсолютно каждый из нас хотя бы раз сравнивал себя с другими. Когда мы себя с кем-то \
            сравниваем, мы теряем себя, мы теряем свою уникальность.\n\n\
            Ты открываешь соц. сети, и видишь, как твоя знакомая Маша отдыхает в Дубае и зарабатывает \
            миллионы. В этот момент ты, скорее всего, думаешь: «Я никчемная, я ничего не могу, вот Машка \
            да, Машка молодец, а чего добилась я? Ничего, и впадаешь в страдания».\n\n\
            Мне знакомо это состояние. Я тоже бываю в таком состоянии. Чаще всего оно приходит тогда, \
            когда у меня что-то не получается. Мне кажется, что я неудачница и все, что я делаю – \
            бесполезно.\n\n\
            Выйти из этого состояния помогает следующее упражнение.\n\n\
            1. Я сажусь и подробно отвечаю на следующие вопросы:  \n\
            - Какую цену я плачу, когда сравниваю себя с другими?  \n\
            - Что я теряю, когда нахожусь в этом состоянии?  \n\n\
            2. Я смотрю на ответы, которые получились. Дальше я принимаю решение, что я хочу с этим \
            сделать? Остаться в этом состоянии «сравнения и уныния» или принять решение выйти из него и \
            пойти жить свою жизнь.\n\n\
            Автор: Екатерина Жемлаускас  \n\
            Сайт для связи: [https://t.me/zhempsy](https://t.me/zhempsy)  \n\
            [Instagram](https://www.instagram.com/ekaterina_zhemlauskas)",
    },
    Practice {
        id: "8",
        button_label: "🌼 Рай под ногами",
        body: "Мой мир не сахар по жизни, особенно раньше. Проваливался в сверх тревожные и навязчивые \
            состояния, в которых хочется уйти, сбежать.  \n\
            От ума, который объяснял, что мир не для меня, до эмоций и телесных ощущений, которые гнали \
            домой.  \n\n\
            >Мне помогает техника обнуления этих ощущений.  \n\n\
            Спрашиваю себя: Кто это думает?  \n\
            Отвечаю: Я! А кто я?  \n\
            После этого ловлю состояние момента, дыхания  \n\
            И повторяю это, когда приходят мысли и эмоции.  \n\
            Выходя на здесь и сейчас, а там только принятие, где -  \n\
            Рай под ногами моими.\n\n\
            Автор: Алексей Сахаров",
    },
];
