//! Closed catalog of recognized template variables
//!
//! Placeholder names are resolved to [`VariableType`] codes once, when a
//! template is parsed into its component stream. Render-time substitution
//! lookup is then a fixed-width integer comparison, never a string
//! comparison. Names outside the catalog map to
//! [`VariableType::ErrorNoMatchingValue`].

/// Code for a recognized `$name$` placeholder.
///
/// The catalog is closed: it enumerates every placeholder the shipped
/// interface templates use, and `ErrorNoMatchingValue` is the sentinel for
/// everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
// The variant names are the catalog, carried over verbatim; numbered
// placeholders keep their separating underscores.
#[allow(missing_docs, non_camel_case_types)]
pub enum VariableType {
    ErrorNoMatchingValue, Action, Active, Actor, Adj, Against, Agressor, Allowed,
    Amount, Anyprovince, Army, ArmyName, Astate, Attacker, Attunit, Bac, Badboy,
    Badword, Base, BasePercentage, Bat, Bld, Bon, Bonus, Brig, Bud, Building,
    Buy, Cap, Capital, Cash, Casus, Cat, Category, CbTargetName, CbTargetNameAdj,
    Chan, Chance, Change, Commander, Con, Construction, Continentname, Cost,
    Count, Countries, Country, Country1, Country2, Countryadj, Countryculture,
    Countryname, CountryAdj, Creator, Credits, Crisisarea, Crisisattacker,
    Crisisdefender, Crisistaker, CrisistakerAdj, Crisistarget, CrisistargetAdj,
    Cul, Culture, CultureGroupUnion, Curr, Current, D, Date, DateLong_0,
    DateLong_1, DateShort_0, Day, Days, Defender, Defunit, Desc, Dest, Details,
    Direction, Dist, Effect, Effects, Emilist, Employees, EmployeeMax, Enemy,
    Engineermaxunits, Engineerunits, Escorts, Event, Eventdesc, Exc, Exp,
    Faction, Factory, First, Focus, Folder, For, Fraction, Friend, From,
    Fromcountry, FromcountryAdj, Fromprovince, Fromruler, Funds, Goal, Good,
    Goods, Gov, Government, Govt, Gp, GpAdj, Group, HighTax, Hit, Home, Hull,
    Iamount, Icountry, Ide, Ideology, Ilocation, Immlist, Impact, Iname, Income,
    Indep, Inf, Infamy, Input, Inv, Invention, Invested, InvestedInUsMessage,
    Issue, Law, Leader, Lev, Level, Levels, Lim, Limit, List, Literacy, Loc,
    Local, Location, Lord, Lose, LowTax, Lvl, M, Max, Maxloan, Men, Messenger,
    Mil, Militancy, Min, Monarchtitle, Money, Month, Months, Movement, Much,
    Name, Nation, Nationalvalue, Natives, Navy, NavyName, Need, Needed, Negative,
    Neut, New, Newcountry, Nf, Now, Num, Number, Numfactories,
    Numspecialfactories, Odds, Old, Oldcountry, Operator, Opinion, OpposingArmy,
    OpposingNavy, Opressor, Opt, Optimal, Option, Order, Org, Organisation,
    Other, Otherresult, Ourcapital, Ourcountry, OurcountryAdj, OurLead, OurNum,
    OurRes, Output, Overlord, Param, Party, Passive, Pay, Pen, Penalty, Per,
    Perc, Perc2, Percent, Percentage, Player, Policy, Pop, Poptype, Popularity,
    Position, Positive, Power, Pres, Prescence, Prestige, Produced, Producer,
    Prog, Progress, Proj, Prov, Provinceculture, Provincename, Provincereligion,
    Provinces, Provs, Province, Rank, Rate, Rec, Recipient, Reconmaxunits,
    Reconunits, Reform, Region, Rel, Relation, Req, Reqlevel, Required, Resource,
    Result, Rstate, Rule, Runs, Scr, Sea, Second, SecondCountry, Self_, Sell,
    Setting, Ships, Size, Skill, Source, Speed, Spheremaster, State, Statename,
    Str, Strata, StringsList_4, String_0_0, String_0_1, String_0_2, String_0_3,
    String_0_4, String_9_0, Sub, Table, Tag, Tag0_0, Tag_0_0, Tag_0_0_,
    Tag_0_0Adj, Tag_0_0Upper, Tag_0_1, Tag_0_1Adj, Tag_0_1Upper, Tag_0_2,
    Tag_0_2Adj, Tag_0_3, Tag_0_3Adj, Tag_1_0, Tag_2_0, Tag_2_0Upper, Tag_3_0,
    Tag_3_0Upper, Target, Targetlist, TargetCountry, Tech, Temperature, Terms,
    Terrain, Terrainmod, Text, Theirlost, Theirnum, Theirship, TheirLead,
    TheirNum, TheirRes, Them, Third, Threat, Time, Title, To, Tot, Totalemi,
    Totalimm, Tra, Truth, Type, Unemployed, Union, UnionAdj, Unit, Units, Until,
    Usloss, Usnum, Val, Value, ValueInt1, ValueInt_0_0, ValueInt_0_1,
    ValueInt_0_2, ValueInt_0_3, ValueInt_0_4, Verb, Versus, War, Wargoal, We,
    What, Where, Which, Who, Winner, X, Y, Year, Years, ChiefOfNavy,
    ChiefOfStaff, Control, HeadOfGovernment, Owner, Playername,
}

/// Resolve a placeholder name to its catalog code.
///
/// Matching is exact and case-sensitive. Unrecognized names return the
/// sentinel rather than failing, so template parsing never aborts on a bad
/// placeholder.
pub fn variable_type_from_name(name: &str) -> VariableType {
    match NAMES.binary_search_by_key(&name, |&(n, _)| n) {
        Ok(i) => NAMES[i].1,
        Err(_) => VariableType::ErrorNoMatchingValue,
    }
}

/// Placeholder names in byte order, for binary search.
static NAMES: &[(&str, VariableType)] = &[
    ("action", VariableType::Action),
    ("active", VariableType::Active),
    ("actor", VariableType::Actor),
    ("adj", VariableType::Adj),
    ("against", VariableType::Against),
    ("agressor", VariableType::Agressor),
    ("allowed", VariableType::Allowed),
    ("amount", VariableType::Amount),
    ("anyprovince", VariableType::Anyprovince),
    ("army", VariableType::Army),
    ("army_name", VariableType::ArmyName),
    ("astate", VariableType::Astate),
    ("attacker", VariableType::Attacker),
    ("attunit", VariableType::Attunit),
    ("bac", VariableType::Bac),
    ("badboy", VariableType::Badboy),
    ("badword", VariableType::Badword),
    ("base", VariableType::Base),
    ("base_percentage", VariableType::BasePercentage),
    ("bat", VariableType::Bat),
    ("bld", VariableType::Bld),
    ("bon", VariableType::Bon),
    ("bonus", VariableType::Bonus),
    ("brig", VariableType::Brig),
    ("bud", VariableType::Bud),
    ("building", VariableType::Building),
    ("buy", VariableType::Buy),
    ("cap", VariableType::Cap),
    ("capital", VariableType::Capital),
    ("cash", VariableType::Cash),
    ("casus", VariableType::Casus),
    ("cat", VariableType::Cat),
    ("category", VariableType::Category),
    ("cb_target_name", VariableType::CbTargetName),
    ("cb_target_name_adj", VariableType::CbTargetNameAdj),
    ("chan", VariableType::Chan),
    ("chance", VariableType::Chance),
    ("change", VariableType::Change),
    ("chief_of_navy", VariableType::ChiefOfNavy),
    ("chief_of_staff", VariableType::ChiefOfStaff),
    ("commander", VariableType::Commander),
    ("con", VariableType::Con),
    ("construction", VariableType::Construction),
    ("continentname", VariableType::Continentname),
    ("control", VariableType::Control),
    ("cost", VariableType::Cost),
    ("count", VariableType::Count),
    ("countries", VariableType::Countries),
    ("country", VariableType::Country),
    ("country1", VariableType::Country1),
    ("country2", VariableType::Country2),
    ("country_adj", VariableType::CountryAdj),
    ("countryadj", VariableType::Countryadj),
    ("countryculture", VariableType::Countryculture),
    ("countryname", VariableType::Countryname),
    ("creator", VariableType::Creator),
    ("credits", VariableType::Credits),
    ("crisisarea", VariableType::Crisisarea),
    ("crisisattacker", VariableType::Crisisattacker),
    ("crisisdefender", VariableType::Crisisdefender),
    ("crisistaker", VariableType::Crisistaker),
    ("crisistaker_adj", VariableType::CrisistakerAdj),
    ("crisistarget", VariableType::Crisistarget),
    ("crisistarget_adj", VariableType::CrisistargetAdj),
    ("cul", VariableType::Cul),
    ("culture", VariableType::Culture),
    ("culture_group_union", VariableType::CultureGroupUnion),
    ("curr", VariableType::Curr),
    ("current", VariableType::Current),
    ("d", VariableType::D),
    ("date", VariableType::Date),
    ("date_long_0", VariableType::DateLong_0),
    ("date_long_1", VariableType::DateLong_1),
    ("date_short_0", VariableType::DateShort_0),
    ("day", VariableType::Day),
    ("days", VariableType::Days),
    ("defender", VariableType::Defender),
    ("defunit", VariableType::Defunit),
    ("desc", VariableType::Desc),
    ("dest", VariableType::Dest),
    ("details", VariableType::Details),
    ("direction", VariableType::Direction),
    ("dist", VariableType::Dist),
    ("effect", VariableType::Effect),
    ("effects", VariableType::Effects),
    ("emilist", VariableType::Emilist),
    ("employee_max", VariableType::EmployeeMax),
    ("employees", VariableType::Employees),
    ("enemy", VariableType::Enemy),
    ("engineermaxunits", VariableType::Engineermaxunits),
    ("engineerunits", VariableType::Engineerunits),
    ("escorts", VariableType::Escorts),
    ("event", VariableType::Event),
    ("eventdesc", VariableType::Eventdesc),
    ("exc", VariableType::Exc),
    ("exp", VariableType::Exp),
    ("faction", VariableType::Faction),
    ("factory", VariableType::Factory),
    ("first", VariableType::First),
    ("focus", VariableType::Focus),
    ("folder", VariableType::Folder),
    ("for", VariableType::For),
    ("fraction", VariableType::Fraction),
    ("friend", VariableType::Friend),
    ("from", VariableType::From),
    ("fromcountry", VariableType::Fromcountry),
    ("fromcountry_adj", VariableType::FromcountryAdj),
    ("fromprovince", VariableType::Fromprovince),
    ("fromruler", VariableType::Fromruler),
    ("funds", VariableType::Funds),
    ("goal", VariableType::Goal),
    ("good", VariableType::Good),
    ("goods", VariableType::Goods),
    ("gov", VariableType::Gov),
    ("government", VariableType::Government),
    ("govt", VariableType::Govt),
    ("gp", VariableType::Gp),
    ("gp_adj", VariableType::GpAdj),
    ("group", VariableType::Group),
    ("head_of_government", VariableType::HeadOfGovernment),
    ("high_tax", VariableType::HighTax),
    ("hit", VariableType::Hit),
    ("home", VariableType::Home),
    ("hull", VariableType::Hull),
    ("iamount", VariableType::Iamount),
    ("icountry", VariableType::Icountry),
    ("ide", VariableType::Ide),
    ("ideology", VariableType::Ideology),
    ("ilocation", VariableType::Ilocation),
    ("immlist", VariableType::Immlist),
    ("impact", VariableType::Impact),
    ("iname", VariableType::Iname),
    ("income", VariableType::Income),
    ("indep", VariableType::Indep),
    ("inf", VariableType::Inf),
    ("infamy", VariableType::Infamy),
    ("input", VariableType::Input),
    ("inv", VariableType::Inv),
    ("invention", VariableType::Invention),
    ("invested", VariableType::Invested),
    ("invested_in_us_message", VariableType::InvestedInUsMessage),
    ("issue", VariableType::Issue),
    ("law", VariableType::Law),
    ("leader", VariableType::Leader),
    ("lev", VariableType::Lev),
    ("level", VariableType::Level),
    ("levels", VariableType::Levels),
    ("lim", VariableType::Lim),
    ("limit", VariableType::Limit),
    ("list", VariableType::List),
    ("literacy", VariableType::Literacy),
    ("loc", VariableType::Loc),
    ("local", VariableType::Local),
    ("location", VariableType::Location),
    ("lord", VariableType::Lord),
    ("lose", VariableType::Lose),
    ("low_tax", VariableType::LowTax),
    ("lvl", VariableType::Lvl),
    ("m", VariableType::M),
    ("max", VariableType::Max),
    ("maxloan", VariableType::Maxloan),
    ("men", VariableType::Men),
    ("messenger", VariableType::Messenger),
    ("mil", VariableType::Mil),
    ("militancy", VariableType::Militancy),
    ("min", VariableType::Min),
    ("monarchtitle", VariableType::Monarchtitle),
    ("money", VariableType::Money),
    ("month", VariableType::Month),
    ("months", VariableType::Months),
    ("movement", VariableType::Movement),
    ("much", VariableType::Much),
    ("name", VariableType::Name),
    ("nation", VariableType::Nation),
    ("nationalvalue", VariableType::Nationalvalue),
    ("natives", VariableType::Natives),
    ("navy", VariableType::Navy),
    ("navy_name", VariableType::NavyName),
    ("need", VariableType::Need),
    ("needed", VariableType::Needed),
    ("negative", VariableType::Negative),
    ("neut", VariableType::Neut),
    ("new", VariableType::New),
    ("newcountry", VariableType::Newcountry),
    ("nf", VariableType::Nf),
    ("now", VariableType::Now),
    ("num", VariableType::Num),
    ("number", VariableType::Number),
    ("numfactories", VariableType::Numfactories),
    ("numspecialfactories", VariableType::Numspecialfactories),
    ("odds", VariableType::Odds),
    ("old", VariableType::Old),
    ("oldcountry", VariableType::Oldcountry),
    ("operator", VariableType::Operator),
    ("opinion", VariableType::Opinion),
    ("opposing_army", VariableType::OpposingArmy),
    ("opposing_navy", VariableType::OpposingNavy),
    ("opressor", VariableType::Opressor),
    ("opt", VariableType::Opt),
    ("optimal", VariableType::Optimal),
    ("option", VariableType::Option),
    ("order", VariableType::Order),
    ("org", VariableType::Org),
    ("organisation", VariableType::Organisation),
    ("other", VariableType::Other),
    ("otherresult", VariableType::Otherresult),
    ("our_lead", VariableType::OurLead),
    ("our_num", VariableType::OurNum),
    ("our_res", VariableType::OurRes),
    ("ourcapital", VariableType::Ourcapital),
    ("ourcountry", VariableType::Ourcountry),
    ("ourcountry_adj", VariableType::OurcountryAdj),
    ("output", VariableType::Output),
    ("overlord", VariableType::Overlord),
    ("owner", VariableType::Owner),
    ("param", VariableType::Param),
    ("party", VariableType::Party),
    ("passive", VariableType::Passive),
    ("pay", VariableType::Pay),
    ("pen", VariableType::Pen),
    ("penalty", VariableType::Penalty),
    ("per", VariableType::Per),
    ("perc", VariableType::Perc),
    ("perc2", VariableType::Perc2),
    ("percent", VariableType::Percent),
    ("percentage", VariableType::Percentage),
    ("player", VariableType::Player),
    ("playername", VariableType::Playername),
    ("policy", VariableType::Policy),
    ("pop", VariableType::Pop),
    ("poptype", VariableType::Poptype),
    ("popularity", VariableType::Popularity),
    ("position", VariableType::Position),
    ("positive", VariableType::Positive),
    ("power", VariableType::Power),
    ("pres", VariableType::Pres),
    ("prescence", VariableType::Prescence),
    ("prestige", VariableType::Prestige),
    ("produced", VariableType::Produced),
    ("producer", VariableType::Producer),
    ("prog", VariableType::Prog),
    ("progress", VariableType::Progress),
    ("proj", VariableType::Proj),
    ("prov", VariableType::Prov),
    ("province", VariableType::Province),
    ("provinceculture", VariableType::Provinceculture),
    ("provincename", VariableType::Provincename),
    ("provincereligion", VariableType::Provincereligion),
    ("provinces", VariableType::Provinces),
    ("provs", VariableType::Provs),
    ("rank", VariableType::Rank),
    ("rate", VariableType::Rate),
    ("rec", VariableType::Rec),
    ("recipient", VariableType::Recipient),
    ("reconmaxunits", VariableType::Reconmaxunits),
    ("reconunits", VariableType::Reconunits),
    ("reform", VariableType::Reform),
    ("region", VariableType::Region),
    ("rel", VariableType::Rel),
    ("relation", VariableType::Relation),
    ("req", VariableType::Req),
    ("reqlevel", VariableType::Reqlevel),
    ("required", VariableType::Required),
    ("resource", VariableType::Resource),
    ("result", VariableType::Result),
    ("rstate", VariableType::Rstate),
    ("rule", VariableType::Rule),
    ("runs", VariableType::Runs),
    ("scr", VariableType::Scr),
    ("sea", VariableType::Sea),
    ("second", VariableType::Second),
    ("second_country", VariableType::SecondCountry),
    ("self", VariableType::Self_),
    ("sell", VariableType::Sell),
    ("setting", VariableType::Setting),
    ("ships", VariableType::Ships),
    ("size", VariableType::Size),
    ("skill", VariableType::Skill),
    ("source", VariableType::Source),
    ("speed", VariableType::Speed),
    ("spheremaster", VariableType::Spheremaster),
    ("state", VariableType::State),
    ("statename", VariableType::Statename),
    ("str", VariableType::Str),
    ("strata", VariableType::Strata),
    ("string_0_0", VariableType::String_0_0),
    ("string_0_1", VariableType::String_0_1),
    ("string_0_2", VariableType::String_0_2),
    ("string_0_3", VariableType::String_0_3),
    ("string_0_4", VariableType::String_0_4),
    ("string_9_0", VariableType::String_9_0),
    ("strings_list_4", VariableType::StringsList_4),
    ("sub", VariableType::Sub),
    ("table", VariableType::Table),
    ("tag", VariableType::Tag),
    ("tag0_0", VariableType::Tag0_0),
    ("tag_0_0", VariableType::Tag_0_0),
    ("tag_0_0_", VariableType::Tag_0_0_),
    ("tag_0_0_adj", VariableType::Tag_0_0Adj),
    ("tag_0_0_upper", VariableType::Tag_0_0Upper),
    ("tag_0_1", VariableType::Tag_0_1),
    ("tag_0_1_adj", VariableType::Tag_0_1Adj),
    ("tag_0_1_upper", VariableType::Tag_0_1Upper),
    ("tag_0_2", VariableType::Tag_0_2),
    ("tag_0_2_adj", VariableType::Tag_0_2Adj),
    ("tag_0_3", VariableType::Tag_0_3),
    ("tag_0_3_adj", VariableType::Tag_0_3Adj),
    ("tag_1_0", VariableType::Tag_1_0),
    ("tag_2_0", VariableType::Tag_2_0),
    ("tag_2_0_upper", VariableType::Tag_2_0Upper),
    ("tag_3_0", VariableType::Tag_3_0),
    ("tag_3_0_upper", VariableType::Tag_3_0Upper),
    ("target", VariableType::Target),
    ("target_country", VariableType::TargetCountry),
    ("targetlist", VariableType::Targetlist),
    ("tech", VariableType::Tech),
    ("temperature", VariableType::Temperature),
    ("terms", VariableType::Terms),
    ("terrain", VariableType::Terrain),
    ("terrainmod", VariableType::Terrainmod),
    ("text", VariableType::Text),
    ("their_lead", VariableType::TheirLead),
    ("their_num", VariableType::TheirNum),
    ("their_res", VariableType::TheirRes),
    ("theirlost", VariableType::Theirlost),
    ("theirnum", VariableType::Theirnum),
    ("theirship", VariableType::Theirship),
    ("them", VariableType::Them),
    ("third", VariableType::Third),
    ("threat", VariableType::Threat),
    ("time", VariableType::Time),
    ("title", VariableType::Title),
    ("to", VariableType::To),
    ("tot", VariableType::Tot),
    ("totalemi", VariableType::Totalemi),
    ("totalimm", VariableType::Totalimm),
    ("tra", VariableType::Tra),
    ("truth", VariableType::Truth),
    ("type", VariableType::Type),
    ("unemployed", VariableType::Unemployed),
    ("union", VariableType::Union),
    ("union_adj", VariableType::UnionAdj),
    ("unit", VariableType::Unit),
    ("units", VariableType::Units),
    ("until", VariableType::Until),
    ("usloss", VariableType::Usloss),
    ("usnum", VariableType::Usnum),
    ("val", VariableType::Val),
    ("value", VariableType::Value),
    ("value_int1", VariableType::ValueInt1),
    ("value_int_0_0", VariableType::ValueInt_0_0),
    ("value_int_0_1", VariableType::ValueInt_0_1),
    ("value_int_0_2", VariableType::ValueInt_0_2),
    ("value_int_0_3", VariableType::ValueInt_0_3),
    ("value_int_0_4", VariableType::ValueInt_0_4),
    ("verb", VariableType::Verb),
    ("versus", VariableType::Versus),
    ("war", VariableType::War),
    ("wargoal", VariableType::Wargoal),
    ("we", VariableType::We),
    ("what", VariableType::What),
    ("where", VariableType::Where),
    ("which", VariableType::Which),
    ("who", VariableType::Who),
    ("winner", VariableType::Winner),
    ("x", VariableType::X),
    ("y", VariableType::Y),
    ("year", VariableType::Year),
    ("years", VariableType::Years),
];
