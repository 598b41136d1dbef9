//! Chapter prose

pub(super) const HOME_HINT: &str = "To continue select a chapter from the chapter list.";

pub(super) const COMPOUNDING_INTRO: &str = "\
# Compounding: the eighth wonder of the world

Compounding is the exponential increase in value that comes from earning
interest on both the principal and the interest already accumulated.

Say you lend me $1000 for three years and I promise to pay you 10% each year.

* The $1000 you lend me is the **principal**
* The 10% I pay you each year is the **interest** rate on the loan

With simple interest I pay you $100 at the end of every year and return the
$1000 at the end of the third year. With compound interest I pay 10% of the
principal in the first year, then 10% of the principal plus the first year's
interest, then 10% of the principal plus both previous years' interest:
$100, then $110, then $121.

You end up with $1300 under simple interest and $1331 under compound interest.
Stretch the loan to 20 years and the gap becomes $3000 against $6727.50. The
longer the horizon, the more obvious the exponential growth.
";

pub(super) const TRY_IT_OUT: &str = "\
## Try it out

Compounding is hard to get a feel for without running a few experiments:

* Starting principal: the amount of money you start with
* Years: how long the experiment runs
* Annual contribution: the amount added to the machine each year
* Interest rate: the interest paid each year

Try extending the number of years. What happens with a small yearly
contribution? What happens to the final value when the rate changes?
";

pub(super) const GROWTH_HEADING: &str = "### Growth over time";

pub(super) const CHART_NOTE: &str = "\
Chart values are rounded to the cent each year, so the last bar can differ
from the final value above by a fraction of a cent.";

pub(super) const COMPOUNDING_OUTRO: &str = "\
## Chess and compounding

Legend has it that when the inventor of chess showed the game to the emperor
of India, the emperor offered any reward he liked. The inventor asked for one
grain of rice on the first square of the board, two on the second, four on the
third, doubling on every square up to the sixty-fourth.

The emperor agreed, thinking it a small price. A week later his treasurer
reported that the reward exceeded all the rice that could be grown in
centuries.

Compounding is neither good nor bad; it is a mathematical fact. Our job is to
make it work for us: save a little more today to reap a much larger reward
later, and take the long view.

**In sum: use your long time horizon. Save, but not so much that you cannot
enjoy the present, and plant the seeds of your own compounding machine.**

The best time to plant a tree was twenty years ago. The next best time is today.
";

pub(super) const FINANCE_STARTER_KIT: &str = "\
# Finance starter kit

Your financial strength is a function of four variables:

1. **Income**: the money you make
2. **Expenses**: the money you spend
3. **Savings**: the pool of money you have set aside
4. **Investments**: money available for your compounding machine

Start by measuring each one. Work out your monthly income and expenses, and
tally what sits in your savings and investment accounts. What is measured is
managed.

## Income

- mostly comes from your job, and also from alternative sources (freelancing)
- often neglected, but think about ways to raise it (salary negotiation, etc.)
- make sure monthly net income (income minus expenses) is positive

## Expenses

- figure out what you enjoy and spend comfortably there, within reason
    - cut everything else
- focus on the big ticket items (car payments, mortgages, subscriptions, student loans)
- other expenses: credit card debt, student loan debt, taxes
- work out your average monthly expense

## Savings

- rule of thumb: keep 3-6 months of expenses in savings
    - do not invest until you have at least 3 months saved

## Investments

The most neglected part of personal finance, and arguably the most important,
because this is where the compounding machine lives.

Go to the next chapter to learn more!
";

pub(super) const INVESTING: &str = "\
# Investing

**This chapter is under construction.**
";
